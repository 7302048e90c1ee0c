//! Marketing copy: testimonials, features, values, stats, contact channels
//! and navigation.

use std::sync::LazyLock;

use crate::types::{
    ContactChannel, Feature, Icon, LinkColumn, NavLink, SocialProfile, Stat, Testimonial,
};

fn feature(icon: Icon, title: &str, description: &str) -> Feature {
    Feature {
        icon,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn stat(value: &str, label: &str, icon: Option<Icon>) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
        icon,
    }
}

fn links(items: &[(&str, &str)]) -> Vec<NavLink> {
    items.iter().map(|(name, href)| NavLink::new(*name, *href)).collect()
}

static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(|| {
    let avatar = |photo: &str| {
        format!("https://images.unsplash.com/photo-{photo}?w=200&auto=format&fit=crop&q=80")
    };
    vec![
        Testimonial {
            id: 1,
            content: "Artvince Academy completely transformed my career. The instructors don't just teach — they mentor. I landed my dream job at a AAA studio within 6 months of completing the course.".to_string(),
            author: "Michael Torres".to_string(),
            role: "Senior 3D Artist at Epic Games".to_string(),
            avatar: avatar("1507003211169-0a1dd7228f2d"),
            rating: 5,
        },
        Testimonial {
            id: 2,
            content: "The project-based approach is incredible. By the end of my course, I had a portfolio that actually impressed recruiters. The community support is unlike anything I've experienced.".to_string(),
            author: "Emily Zhang".to_string(),
            role: "Character Designer at Riot Games".to_string(),
            avatar: avatar("1494790108377-be9c29b29330"),
            rating: 5,
        },
        Testimonial {
            id: 3,
            content: "As someone transitioning from traditional art, I was intimidated by 3D software. The instructors made complex concepts accessible. Now I'm creating environments for indie games.".to_string(),
            author: "David Kim".to_string(),
            role: "Indie Game Developer".to_string(),
            avatar: avatar("1500648767791-00dcc994a43e"),
            rating: 5,
        },
    ]
});

static FEATURES: LazyLock<Vec<Feature>> = LazyLock::new(|| {
    vec![
        feature(Icon::Gamepad, "Industry-Standard Tools",
            "Learn with the same tools used by AAA studios: Unreal Engine, Unity, Blender, Maya, and more."),
        feature(Icon::Users, "Expert Mentorship",
            "Get personalized guidance from professionals who've worked on blockbuster games and films."),
        feature(Icon::Trophy, "Project-Based Learning",
            "Build a portfolio of real projects that showcase your skills to potential employers."),
        feature(Icon::Zap, "Cutting-Edge Curriculum",
            "Stay ahead with constantly updated courses covering the latest industry techniques."),
        feature(Icon::Palette, "Creative Community",
            "Join a vibrant community of artists, developers, and creators from around the world."),
        feature(Icon::GraduationCap, "Career Support",
            "Get job placement assistance, portfolio reviews, and interview preparation."),
    ]
});

static VALUES: LazyLock<Vec<Feature>> = LazyLock::new(|| {
    vec![
        feature(Icon::Target, "Excellence", "We pursue the highest standards in everything we create and teach."),
        feature(Icon::Eye, "Innovation", "Staying ahead of industry trends to prepare students for tomorrow."),
        feature(Icon::Rocket, "Growth", "Fostering continuous learning and personal development."),
        feature(Icon::Award, "Quality", "Delivering premium education that transforms careers."),
        feature(Icon::Users, "Community", "Building a supportive network of creators worldwide."),
        feature(Icon::Globe, "Accessibility", "Making world-class education available to everyone."),
    ]
});

static HERO_STATS: LazyLock<Vec<Stat>> = LazyLock::new(|| {
    vec![
        stat("10K+", "Students Enrolled", Some(Icon::Globe)),
        stat("50+", "Expert Mentors", Some(Icon::GraduationCap)),
        stat("100+", "Premium Courses", Some(Icon::Zap)),
        stat("95%", "Success Rate", Some(Icon::Sparkles)),
    ]
});

static ABOUT_STATS: LazyLock<Vec<Stat>> = LazyLock::new(|| {
    vec![
        stat("10,000+", "Students Worldwide", None),
        stat("50+", "Expert Instructors", None),
        stat("100+", "Premium Courses", None),
        stat("40+", "Countries Reached", None),
    ]
});

static CONTACT_CHANNELS: LazyLock<Vec<ContactChannel>> = LazyLock::new(|| {
    let channel = |icon, title: &str, details: &str, description: &str| ContactChannel {
        icon,
        title: title.to_string(),
        details: details.to_string(),
        description: description.to_string(),
    };
    vec![
        channel(Icon::Mail, "Email Us", "hello@artvinceacademy.com", "We'll respond within 24 hours"),
        channel(Icon::MapPin, "Visit Us", "San Francisco, CA", "By appointment only"),
        channel(Icon::Clock, "Office Hours", "Mon - Fri, 9am - 6pm PST", "Weekend support available"),
    ]
});

static NAV_LINKS: LazyLock<Vec<NavLink>> = LazyLock::new(|| {
    links(&[
        ("Home", "/"),
        ("Courses", "/courses"),
        ("About", "/about"),
        ("Mentors", "/mentors"),
        ("Contact", "/contact"),
    ])
});

static FOOTER_COLUMNS: LazyLock<Vec<LinkColumn>> = LazyLock::new(|| {
    vec![
        LinkColumn {
            title: "Courses".to_string(),
            links: links(&[
                ("Game Development", "/courses/game-development"),
                ("3D Animation", "/courses/3d-animation"),
                ("Character Design", "/courses/character-design"),
                ("Environment Design", "/courses/environment-design"),
                ("Web Development", "/courses/web-development"),
            ]),
        },
        LinkColumn {
            title: "Company".to_string(),
            links: links(&[
                ("About Us", "/about"),
                ("Mentors", "/mentors"),
                ("Careers", "/careers"),
                ("Blog", "/blog"),
                ("Contact", "/contact"),
            ]),
        },
        LinkColumn {
            title: "Support".to_string(),
            links: links(&[
                ("Help Center", "/help"),
                ("FAQs", "/faqs"),
                ("Privacy Policy", "/privacy"),
                ("Terms of Service", "/terms"),
                ("Refund Policy", "/refunds"),
            ]),
        },
    ]
});

static SOCIAL_PROFILES: LazyLock<Vec<SocialProfile>> = LazyLock::new(|| {
    let profile = |icon, href: &str, label: &str| SocialProfile {
        icon,
        href: href.to_string(),
        label: label.to_string(),
    };
    vec![
        profile(Icon::Twitter, "https://twitter.com", "Twitter"),
        profile(Icon::Instagram, "https://instagram.com", "Instagram"),
        profile(Icon::Youtube, "https://youtube.com", "YouTube"),
        profile(Icon::Linkedin, "https://linkedin.com", "LinkedIn"),
    ]
});

pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}

/// "Why choose us" tiles on the home page.
pub fn features() -> &'static [Feature] {
    &FEATURES
}

/// Core values on the about page.
pub fn values() -> &'static [Feature] {
    &VALUES
}

pub fn hero_stats() -> &'static [Stat] {
    &HERO_STATS
}

pub fn about_stats() -> &'static [Stat] {
    &ABOUT_STATS
}

pub fn contact_channels() -> &'static [ContactChannel] {
    &CONTACT_CHANNELS
}

/// Primary navigation, shared by the desktop bar and the mobile menu.
pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}

pub fn footer_columns() -> &'static [LinkColumn] {
    &FOOTER_COLUMNS
}

pub fn social_links() -> &'static [SocialProfile] {
    &SOCIAL_PROFILES
}
