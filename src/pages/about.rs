//! About page: story, mission and vision, numbers, core values.

use crate::catalog;
use crate::components::why_choose_us::feature_tile;
use crate::components::{cta, observe, reveal, section_header, Entrance, RevealTarget};
use crate::state::RevealOptions;
use crate::types::Icon;
use crate::view::{el, fragment, icon, Element, Node, ViewContext};

use super::PageHero;

pub const HEADER_ID: &str = "about-hero";
pub const MISSION_ID: &str = "about-mission";
pub const STATS_ID: &str = "about-stats";
pub const VALUES_ID: &str = "about-values";

const MISSION: &str = "To democratize access to premium creative education, empowering anyone with passion to master game development, 3D art, and digital design through industry-grade curriculum and expert mentorship.";
const VISION: &str = "To become the world's leading creative academy, recognized for producing industry-ready talent and pushing the boundaries of what's possible in game art and development education.";

pub fn reveal_targets() -> Vec<RevealTarget> {
    let mut targets = vec![
        (HEADER_ID.to_string(), RevealOptions::HEADER),
        (MISSION_ID.to_string(), RevealOptions::SECTION),
        (STATS_ID.to_string(), RevealOptions::HEADER),
        (VALUES_ID.to_string(), RevealOptions::SECTION),
    ];
    targets.extend(cta::reveal_targets());
    targets
}

fn statement(kind: Icon, heading: &str, body: &str) -> Element {
    el("div")
        .class("card statement")
        .child(el("div").class("feature-icon feature-icon-lg").child(icon(kind, 28, "text-primary")))
        .child(el("h2").text(heading))
        .child(el("p").class("muted lead-sm").text(body))
}

fn mission(ctx: &ViewContext) -> Element {
    let grid = el("div")
        .class("grid grid-2")
        .child(reveal(ctx, MISSION_ID, Entrance::FromLeft, 0.0, statement(Icon::Target, "Our Mission", MISSION)))
        .child(reveal(ctx, MISSION_ID, Entrance::FromRight, 0.1, statement(Icon::Eye, "Our Vision", VISION)));
    el("section")
        .class("section")
        .child(el("div").class("container").child(observe(MISSION_ID, grid)))
}

fn stats(ctx: &ViewContext) -> Element {
    let items = catalog::about_stats().iter().enumerate().map(|(i, stat)| {
        let item = el("div")
            .class("stat text-center")
            .child(el("div").class("stat-value-lg gradient-text").text(stat.value.as_str()))
            .child(el("div").class("muted").text(stat.label.as_str()));
        reveal(ctx, STATS_ID, Entrance::Rise, i as f64 * 0.1, item)
    });
    el("section")
        .class("section-band stats-band")
        .child(el("div").class("container").child(observe(STATS_ID, el("div").class("grid grid-4").children(items))))
}

fn values(ctx: &ViewContext) -> Element {
    let tiles = catalog::values()
        .iter()
        .enumerate()
        .map(|(i, value)| feature_tile(ctx, VALUES_ID, value, i));
    let section = el("section").class("section").child(
        el("div")
            .class("container")
            .child(reveal(
                ctx,
                VALUES_ID,
                Entrance::Rise,
                0.0,
                section_header("What We Stand For", "Our Core", "Values", None),
            ))
            .child(el("div").class("grid grid-3").children(tiles)),
    );
    observe(VALUES_ID, section)
}

pub fn about(ctx: &ViewContext) -> Node {
    let lead = format!(
        "{} was founded with a singular vision: to bridge the gap between aspiring artists and the game industry's highest standards.",
        ctx.config.brand_name
    );
    let hero = PageHero {
        reveal_id: HEADER_ID,
        eyebrow: Some("Our Story"),
        title: "Shaping the Future of",
        highlight: "Creative Education",
        break_before_highlight: true,
        lead: &lead,
        centered: true,
    };
    fragment([
        hero.render(ctx).into(),
        mission(ctx).into(),
        stats(ctx).into(),
        values(ctx).into(),
        cta::cta(ctx),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;
    use crate::view::RevealPolicy;

    #[test]
    fn test_about_content() {
        let config = SiteConfig::default();
        let page = about(&ViewContext::settled(&config, Route::About));
        let text = page.text_content();
        assert!(text.contains("Artvince Academy was founded"));
        assert!(text.contains("Our Mission"));
        assert!(text.contains("Our Vision"));
        assert_eq!(page.find_all(&|e| e.has_class("feature-tile")).len(), catalog::values().len());
    }

    #[test]
    fn test_mission_reveals_independently() {
        let config = SiteConfig::default();
        let mut ctx = ViewContext::settled(&config, Route::About);
        ctx.policy = RevealPolicy::Live;
        ctx.revealed.insert(MISSION_ID.to_string());
        let page = about(&ctx);
        let visible = page.find_all(&|e| e.has_class("is-visible"));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|e| e.get_attr("data-reveal") == Some(MISSION_ID)));
    }
}
