//! Mentor directory data.

use std::sync::LazyLock;

use crate::types::{Mentor, SocialLinks};

fn mentor(id: u32, name: &str, role: &str, bio: &str, photo: &str, courses: u32, students: u32) -> Mentor {
    Mentor {
        id,
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        image: format!("https://images.unsplash.com/photo-{photo}?w=400&auto=format&fit=crop&q=80"),
        courses,
        students,
        social: SocialLinks {
            twitter: "#".to_string(),
            linkedin: "#".to_string(),
            website: "#".to_string(),
        },
    }
}

static MENTORS: LazyLock<Vec<Mentor>> = LazyLock::new(|| {
    vec![
        mentor(1, "Alex Rivera", "Game Development Lead",
            "Former Lead Developer at Rockstar Games with 15+ years in AAA game development. Specialist in Unreal Engine and gameplay systems.",
            "1507003211169-0a1dd7228f2d", 8, 4200),
        mentor(2, "Maya Chen", "3D Character Artist",
            "Senior Character Artist with credits at Blizzard and Riot Games. Specializes in stylized and realistic character design for games.",
            "1494790108377-be9c29b29330", 6, 3100),
        mentor(3, "James Porter", "Environment Art Director",
            "Environment Art Director with experience at Naughty Dog and Ubisoft. Expert in world-building and environmental storytelling.",
            "1500648767791-00dcc994a43e", 5, 2800),
        mentor(4, "Sarah Kim", "Animation Director",
            "Award-winning animator with experience at Pixar and DreamWorks. Specializes in character animation and motion capture.",
            "1438761681033-6461ffad8d80", 7, 3500),
        mentor(5, "Chris Anderson", "Weapon & Props Designer",
            "Principal Prop Artist with 10+ years at Bungie and 343 Industries. Expert in hard-surface modeling and game-ready assets.",
            "1472099645785-5658abf4ff4e", 4, 1900),
        mentor(6, "Lisa Wang", "Unity Development Expert",
            "Unity Certified Expert and former tech lead at Supercell. Specializes in mobile game development and optimization.",
            "1580489944761-15a19d654956", 9, 5200),
    ]
});

/// All mentors in display order.
pub fn mentors() -> &'static [Mentor] {
    &MENTORS
}

/// Look up a mentor by id.
pub fn find_mentor(id: u32) -> Option<&'static Mentor> {
    MENTORS.iter().find(|m| m.id == id)
}
