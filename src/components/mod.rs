//! Presentational components.
//!
//! Each component is a function of the [`ViewContext`] (plus its own data)
//! returning a node tree. Components that animate in on scroll also export
//! `reveal_targets()`, the observer registrations the runtime makes for
//! them when their page mounts.

pub mod course_card;
pub mod cta;
pub mod featured;
pub mod footer;
pub mod hero;
pub mod mentor_card;
pub mod navbar;
pub mod reveal;
pub mod testimonials;
pub mod toaster;
pub mod why_choose_us;

use crate::state::RevealOptions;
use crate::theme::Variant;
use crate::types::Icon;
use crate::view::{el, icon, Element, ViewContext};

pub use reveal::{observe, reveal, Entrance};

/// Observer registration: reveal id plus its options.
pub type RevealTarget = (String, RevealOptions);

/// Centered section heading: eyebrow, title with a gradient tail, lead.
pub fn section_header(eyebrow: &str, title: &str, highlight: &str, lead: Option<&str>) -> Element {
    el("div")
        .class("section-header")
        .child(el("span").class("eyebrow").text(eyebrow))
        .child(
            el("h2")
                .class("section-title")
                .text(format!("{title} "))
                .child(el("span").class("gradient-text").text(highlight)),
        )
        .maybe_child(lead.map(|lead| el("p").class("lead").text(lead)))
}

/// Link styled as a button.
pub fn button_link(ctx: &ViewContext, href: &str, variant: Variant, label: &str) -> Element {
    el("a")
        .class("btn")
        .class(variant.class())
        .attr("href", ctx.href(href))
        .text(label)
}

/// Button link with a trailing arrow.
pub fn arrow_link(ctx: &ViewContext, href: &str, variant: Variant, label: &str) -> Element {
    button_link(ctx, href, variant, label).child(icon(Icon::ArrowRight, 18, "btn-arrow"))
}
