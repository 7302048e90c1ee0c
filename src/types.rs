//! Core types for the academy site.
//!
//! Catalog records, icons, navigation links and colors. Everything here is
//! plain data: it is built once from literals and never mutated.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create from a 24-bit RGB integer (0xRRGGBB).
    ///
    /// ```
    /// use artvince_site::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_rgb_int(0x3b82f6), Rgba::rgb(59, 130, 246));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Same color with a new alpha, given as a fraction (0.0-1.0).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// CSS representation: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f32 / 255.0 * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

// =============================================================================
// Course
// =============================================================================

/// Course category. `All` is the filter sentinel, never a course's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "All Courses")]
    All,
    #[serde(rename = "Game Development")]
    GameDevelopment,
    #[serde(rename = "3D Animation")]
    Animation3d,
    #[serde(rename = "Character Design")]
    CharacterDesign,
    #[serde(rename = "Environment Design")]
    EnvironmentDesign,
    #[serde(rename = "Weapon Design")]
    WeaponDesign,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "App Development")]
    AppDevelopment,
}

impl Default for Category {
    fn default() -> Self {
        Self::All
    }
}

impl Category {
    /// Every category in the order the filter bar shows them.
    pub const ALL: [Category; 8] = [
        Category::All,
        Category::GameDevelopment,
        Category::Animation3d,
        Category::CharacterDesign,
        Category::EnvironmentDesign,
        Category::WeaponDesign,
        Category::WebDevelopment,
        Category::AppDevelopment,
    ];

    /// Display name as shown on chips and badges.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All Courses",
            Self::GameDevelopment => "Game Development",
            Self::Animation3d => "3D Animation",
            Self::CharacterDesign => "Character Design",
            Self::EnvironmentDesign => "Environment Design",
            Self::WeaponDesign => "Weapon Design",
            Self::WebDevelopment => "Web Development",
            Self::AppDevelopment => "App Development",
        }
    }

    /// URL slug used by `/courses/<slug>`. The sentinel has none.
    pub const fn slug(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::GameDevelopment => Some("game-development"),
            Self::Animation3d => Some("3d-animation"),
            Self::CharacterDesign => Some("character-design"),
            Self::EnvironmentDesign => Some("environment-design"),
            Self::WeaponDesign => Some("weapon-design"),
            Self::WebDevelopment => Some("web-development"),
            Self::AppDevelopment => Some("app-development"),
        }
    }

    /// Parse a display name (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    /// Parse a URL slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.slug() == Some(slug))
    }

    /// Whether this is the "All Courses" sentinel.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Course difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// A course record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image: String,
    pub instructor: String,
    pub duration: String,
    pub students: u32,
    /// Average rating in [0, 5].
    pub rating: f32,
    /// Price in whole dollars.
    pub price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default)]
    pub featured: bool,
}

// =============================================================================
// People
// =============================================================================

/// Social profile links for a mentor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub twitter: String,
    pub linkedin: String,
    pub website: String,
}

/// A mentor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub courses: u32,
    pub students: u32,
    pub social: SocialLinks,
}

/// A student testimonial shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub content: String,
    pub author: String,
    pub role: String,
    pub avatar: String,
    /// Number of stars, 1-5.
    pub rating: u8,
}

// =============================================================================
// Marketing content
// =============================================================================

/// Named icons from the site's icon set. Rendered as inline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    Award,
    ChevronDown,
    Clock,
    Eye,
    Gamepad,
    Globe,
    GraduationCap,
    Instagram,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Palette,
    Play,
    Quote,
    Rocket,
    Search,
    Send,
    Sparkles,
    Star,
    Target,
    Trophy,
    Twitter,
    Users,
    X,
    Youtube,
    Zap,
}

/// Icon + title + description tile (why-choose-us features, core values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// Headline number with a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// A contact card on the contact page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: String,
    pub details: String,
    pub description: String,
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// External social profile of the academy (footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub icon: Icon,
    pub href: String,
    pub label: String,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

// =============================================================================
// Geometry
// =============================================================================

/// Axis-aligned rectangle in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the point lies inside (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Format a count with thousands separators, e.g. `4120` -> `4,120`.
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("character design"), Some(Category::CharacterDesign));
        assert_eq!(Category::from_label("Sculpting"), None);
    }

    #[test]
    fn test_category_slugs() {
        assert_eq!(Category::All.slug(), None);
        assert_eq!(Category::from_slug("3d-animation"), Some(Category::Animation3d));
        assert_eq!(Category::from_slug("web-development"), Some(Category::WebDevelopment));
        assert_eq!(Category::from_slug("all-courses"), None);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Animation3d).unwrap();
        assert_eq!(json, "\"3D Animation\"");
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::rgb(59, 130, 246).to_css(), "#3b82f6");
        assert_eq!(Rgba::rgb(59, 130, 246).with_alpha(0.2).to_css(), "rgba(59, 130, 246, 0.2)");
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(110.0, 70.0));
        assert!(!rect.contains(9.9, 30.0));
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(980), "980");
        assert_eq!(format_count(4120), "4,120");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
