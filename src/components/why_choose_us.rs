//! "Built for Creators" feature grid. The about page's core values reuse
//! the tile layout.

use crate::catalog;
use crate::state::RevealOptions;
use crate::types::Feature;
use crate::view::{el, icon, Element, Node, ViewContext};

use super::{observe, reveal, section_header, Entrance, RevealTarget};

pub const REVEAL_ID: &str = "why";

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![(REVEAL_ID.to_string(), RevealOptions::SECTION)]
}

/// Icon tile gated on `reveal_id`, staggered 0.1s per index.
pub fn feature_tile(ctx: &ViewContext, reveal_id: &str, feature: &Feature, index: usize) -> Element {
    let tile = el("div")
        .class("card card-interactive feature-tile")
        .child(el("div").class("feature-icon").child(icon(feature.icon, 24, "text-primary")))
        .child(el("h3").text(feature.title.as_str()))
        .child(el("p").class("muted").text(feature.description.as_str()));
    reveal(ctx, reveal_id, Entrance::Lift, index as f64 * 0.1, tile)
}

pub fn why_choose_us(ctx: &ViewContext) -> Node {
    let header = section_header(
        "Why Artvince Academy",
        "Built for",
        "Creators",
        Some("We're not just teaching tools \u{2014} we're shaping the next generation of creative visionaries."),
    );
    let tiles = catalog::features()
        .iter()
        .enumerate()
        .map(|(i, feature)| feature_tile(ctx, REVEAL_ID, feature, i));

    let section = el("section")
        .class("section why-choose-us")
        .child(el("div").class("section-band").attr("aria-hidden", "true"))
        .child(
            el("div")
                .class("container")
                .child(reveal(ctx, REVEAL_ID, Entrance::Rise, 0.0, header))
                .child(el("div").class("grid grid-3").children(tiles)),
        );
    observe(REVEAL_ID, section).into()
}
