//! Scroll-triggered entrance transitions.
//!
//! An observed element carries `data-observe="<id>"` so the platform shell
//! reports its bounds. Any number of descendants can be gated on that id
//! with [`reveal`]; they render hidden until the latch triggers and then
//! transition in, staggered by their delay.

use crate::motion::transform::css_number;
use crate::view::{Element, ViewContext};

/// Starting pose of an entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Rise from 30px below.
    Rise,
    /// Rise from 50px below (cards).
    Lift,
    /// Slide in from the left.
    FromLeft,
    /// Slide in from the right.
    FromRight,
    /// Grow from 95%.
    Zoom,
    Fade,
}

impl Entrance {
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Rise => "reveal-rise",
            Self::Lift => "reveal-lift",
            Self::FromLeft => "reveal-left",
            Self::FromRight => "reveal-right",
            Self::Zoom => "reveal-zoom",
            Self::Fade => "reveal-fade",
        }
    }
}

/// Mark `element` as the observed box for reveal `id`.
pub fn observe(id: &str, element: Element) -> Element {
    element.attr("data-observe", id)
}

/// Gate `element`'s entrance on reveal `id`, starting after `delay` seconds.
pub fn reveal(ctx: &ViewContext, id: &str, entrance: Entrance, delay: f64, element: Element) -> Element {
    let element = element
        .class("reveal")
        .class(entrance.class())
        .class_if(ctx.is_revealed(id), "is-visible")
        .attr("data-reveal", id);
    if delay > 0.0 {
        element.style(format!("transition-delay: {}s;", css_number(delay)))
    } else {
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;
    use crate::view::{el, RevealPolicy};

    #[test]
    fn test_reveal_follows_latch() {
        let config = SiteConfig::default();
        let mut ctx = ViewContext::settled(&config, Route::Home);
        ctx.policy = RevealPolicy::Live;

        let hidden = reveal(&ctx, "cta", Entrance::Zoom, 0.0, el("div"));
        assert!(hidden.has_class("reveal"));
        assert!(hidden.has_class("reveal-zoom"));
        assert!(!hidden.has_class("is-visible"));

        ctx.revealed.insert("cta".to_string());
        let shown = reveal(&ctx, "cta", Entrance::Zoom, 0.25, el("div"));
        assert!(shown.has_class("is-visible"));
        assert_eq!(shown.get_attr("style"), Some("transition-delay: 0.25s;"));
    }

    #[test]
    fn test_observe_marks_element() {
        let element = observe("featured", el("section"));
        assert_eq!(element.get_attr("data-observe"), Some("featured"));
    }
}
