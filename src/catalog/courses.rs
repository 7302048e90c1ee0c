//! Course catalog data.

use std::sync::LazyLock;

use crate::types::{Category, Course, Level};

const IMG: &str = "w=800&auto=format&fit=crop&q=80";

#[allow(clippy::too_many_arguments)]
fn course(
    id: u32,
    title: &str,
    category: Category,
    photo: &str,
    instructor: &str,
    duration: &str,
    students: u32,
    rating: f32,
    price: u32,
    level: Level,
) -> Course {
    Course {
        id,
        title: title.to_string(),
        category,
        image: format!("https://images.unsplash.com/photo-{photo}?{IMG}"),
        instructor: instructor.to_string(),
        duration: duration.to_string(),
        students,
        rating,
        price,
        level: Some(level),
        featured: false,
    }
}

static COURSES: LazyLock<Vec<Course>> = LazyLock::new(|| {
    vec![
        course(1, "Complete Game Development Masterclass", Category::GameDevelopment,
            "1556438064-2d7646166914", "Alex Rivera", "48 hours", 2840, 4.9, 199, Level::Intermediate),
        course(2, "Advanced 3D Character Design", Category::CharacterDesign,
            "1633356122544-f134324a6cee", "Maya Chen", "36 hours", 1920, 4.8, 149, Level::Advanced),
        course(3, "Unreal Engine 5 Environment Art", Category::EnvironmentDesign,
            "1511512578047-dfb367046420", "James Porter", "52 hours", 3210, 4.9, 249, Level::Intermediate),
        course(4, "3D Animation Fundamentals", Category::Animation3d,
            "1614729939124-032d1e6c9945", "Sarah Kim", "28 hours", 1540, 4.7, 129, Level::Beginner),
        course(5, "Weapon Design for Games", Category::WeaponDesign,
            "1542751371-adc38448a05e", "Chris Anderson", "24 hours", 980, 4.8, 119, Level::Intermediate),
        course(6, "Unity Game Development Bootcamp", Category::GameDevelopment,
            "1552820728-8b83bb6b2b09", "Lisa Wang", "60 hours", 4120, 4.9, 299, Level::Beginner),
        course(7, "Game UI/UX Design Mastery", Category::WebDevelopment,
            "1561070791-2526d30994b5", "Tom Bradley", "20 hours", 1280, 4.6, 99, Level::Intermediate),
        course(8, "Mobile Game Development with Flutter", Category::AppDevelopment,
            "1551650975-87deedd944c3", "Nina Patel", "32 hours", 890, 4.7, 159, Level::Intermediate),
    ]
});

/// Home page selection: the first four courses, ids 1 and 3 highlighted.
static FEATURED: LazyLock<Vec<Course>> = LazyLock::new(|| {
    COURSES
        .iter()
        .take(4)
        .map(|c| Course {
            featured: matches!(c.id, 1 | 3),
            level: None,
            ..c.clone()
        })
        .collect()
});

/// The full catalog in display order.
pub fn courses() -> &'static [Course] {
    &COURSES
}

/// Courses shown in the home page grid.
pub fn featured_courses() -> &'static [Course] {
    &FEATURED
}

/// Look up a course by id.
pub fn find_course(id: u32) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}
