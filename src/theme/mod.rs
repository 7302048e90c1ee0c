//! Theme System - Academy palette and button variants.
//!
//! Colors live in one [`Palette`] of [`Rgba`] slots. The stylesheet reads
//! them through CSS custom properties, so the generated rules never repeat
//! a literal color.
//!
//! # Example
//!
//! ```rust
//! use artvince_site::theme::{Palette, Variant};
//!
//! let palette = Palette::academy();
//! assert_eq!(palette.primary.to_css(), "#3b82f6");
//! assert!(palette.css_variables().contains("--primary: #3b82f6;"));
//! assert_eq!(Variant::Glass.class(), "btn-glass");
//! ```

pub mod stylesheet;

use crate::types::Rgba;

pub use stylesheet::stylesheet;

// =============================================================================
// Palette - All semantic colors
// =============================================================================

/// Site palette.
///
/// Slots are organized into:
/// - Brand: primary, primary_glow, accent
/// - Text: text, text_muted
/// - Background: background, surface, secondary
/// - Lines and states: border, destructive
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,

    // =========================================================================
    // Brand
    // =========================================================================

    /// Primary brand blue.
    pub primary: Rgba,
    /// Lighter primary for glows and gradient ends.
    pub primary_glow: Rgba,
    /// Violet accent (stars, gradient tail).
    pub accent: Rgba,

    // =========================================================================
    // Text
    // =========================================================================

    pub text: Rgba,
    pub text_muted: Rgba,

    // =========================================================================
    // Background
    // =========================================================================

    /// Page background.
    pub background: Rgba,
    /// Cards and panels.
    pub surface: Rgba,
    /// Chips, inputs, secondary buttons.
    pub secondary: Rgba,

    pub border: Rgba,
    pub destructive: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self::academy()
    }
}

impl Palette {
    /// Dark palette the site ships with.
    pub fn academy() -> Self {
        Self {
            name: "academy".to_string(),
            primary: Rgba::from_rgb_int(0x3b82f6),
            primary_glow: Rgba::from_rgb_int(0x60a5fa),
            accent: Rgba::from_rgb_int(0x8b5cf6),
            text: Rgba::from_rgb_int(0xf8fafc),
            text_muted: Rgba::from_rgb_int(0x94a3b8),
            background: Rgba::from_rgb_int(0x0a0a0f),
            surface: Rgba::from_rgb_int(0x12121a),
            secondary: Rgba::from_rgb_int(0x1e1e2e),
            border: Rgba::from_rgb_int(0x27273a),
            destructive: Rgba::from_rgb_int(0xef4444),
        }
    }

    /// Slot names paired with their colors, in declaration order.
    pub fn slots(&self) -> [(&'static str, Rgba); 10] {
        [
            ("primary", self.primary),
            ("primary-glow", self.primary_glow),
            ("accent", self.accent),
            ("foreground", self.text),
            ("muted-foreground", self.text_muted),
            ("background", self.background),
            ("card", self.surface),
            ("secondary", self.secondary),
            ("border", self.border),
            ("destructive", self.destructive),
        ]
    }

    /// `:root` block declaring every slot as a custom property, plus the
    /// translucent tints the glass and glow rules use.
    pub fn css_variables(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, color) in self.slots() {
            out.push_str(&format!("  --{name}: {};\n", color.to_css()));
        }
        let tints = [
            ("primary-soft", self.primary.with_alpha(0.2)),
            ("accent-soft", self.accent.with_alpha(0.2)),
            ("glass", self.background.with_alpha(0.7)),
            ("glass-border", self.text.with_alpha(0.08)),
        ];
        for (name, color) in tints {
            out.push_str(&format!("  --{name}: {};\n", color.to_css()));
        }
        out.push_str(&format!(
            "  --gradient-brand: linear-gradient(135deg, {} 0%, {} 50%, {} 100%);\n",
            self.primary.to_css(),
            self.primary_glow.to_css(),
            self.accent.to_css()
        ));
        out.push_str("}\n");
        out
    }
}

// =============================================================================
// Variant - Button styles
// =============================================================================

/// Button look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Gradient fill, the main call to action.
    #[default]
    Hero,
    /// Gradient fill with a glow, used in the hero.
    Premium,
    /// Frosted translucent fill.
    Glass,
    Outline,
    Ghost,
}

impl Variant {
    pub const ALL: [Variant; 5] = [Self::Hero, Self::Premium, Self::Glass, Self::Outline, Self::Ghost];

    pub const fn class(&self) -> &'static str {
        match self {
            Self::Hero => "btn-hero",
            Self::Premium => "btn-premium",
            Self::Glass => "btn-glass",
            Self::Outline => "btn-outline",
            Self::Ghost => "btn-ghost",
        }
    }

    /// Declarations for this variant's rule.
    pub(crate) fn declarations(&self) -> &'static str {
        match self {
            Self::Hero => "background: var(--gradient-brand); color: var(--foreground);",
            Self::Premium => {
                "background: var(--gradient-brand); color: var(--foreground); box-shadow: 0 0 40px var(--primary-soft);"
            }
            Self::Glass => {
                "background: var(--glass); border: 1px solid var(--glass-border); color: var(--foreground); backdrop-filter: blur(16px);"
            }
            Self::Outline => "background: transparent; border: 1px solid var(--border); color: var(--foreground);",
            Self::Ghost => "background: transparent; color: var(--foreground);",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academy_palette() {
        let palette = Palette::academy();
        assert_eq!(palette.background.to_css(), "#0a0a0f");
        assert_eq!(palette.accent.to_css(), "#8b5cf6");
        assert_eq!(Palette::default(), palette);
    }

    #[test]
    fn test_css_variables_cover_every_slot() {
        let palette = Palette::academy();
        let css = palette.css_variables();
        for (name, color) in palette.slots() {
            assert!(css.contains(&format!("--{name}: {};", color.to_css())), "{name}");
        }
        assert!(css.contains("--glass: rgba(10, 10, 15, 0.7);"));
    }

    #[test]
    fn test_variant_classes_unique() {
        let mut classes: Vec<&str> = Variant::ALL.iter().map(|v| v.class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), Variant::ALL.len());
    }
}
