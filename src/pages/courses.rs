//! Course catalog page.
//!
//! Search box, category chips, result count and the card grid. The values
//! shown come from [`CatalogView`](crate::view::CatalogView); the controls
//! carry `data-action` hooks the runtime turns into filter updates.

use crate::catalog;
use crate::components::course_card::{self, course_card, CardStyle};
use crate::components::RevealTarget;
use crate::state::RevealOptions;
use crate::types::{Category, Icon};
use crate::view::{el, fragment, icon, Element, Node, ViewContext};

use super::PageHero;

pub const HEADER_ID: &str = "courses-header";

const LEAD: &str = "Discover industry-leading courses in game development, 3D art, and creative design. Learn at your own pace from world-class instructors.";

pub fn reveal_targets() -> Vec<RevealTarget> {
    let mut targets = vec![(HEADER_ID.to_string(), RevealOptions::HEADER)];
    targets.extend(course_card::reveal_targets(CardStyle::Catalog, catalog::courses()));
    targets
}

fn search_box(ctx: &ViewContext) -> Element {
    el("div")
        .class("search")
        .child(icon(Icon::Search, 16, "search-icon"))
        .child(
            el("input")
                .class("input search-input")
                .attr("type", "text")
                .attr("name", "search")
                .attr("placeholder", "Search courses...")
                .attr("aria-label", "Search courses")
                .attr("data-action", "search")
                .attr("value", ctx.catalog.query.as_str()),
        )
}

fn category_chips(ctx: &ViewContext) -> Element {
    let chips = Category::ALL.iter().map(|category| {
        let active = *category == ctx.catalog.category;
        el("button")
            .class("chip")
            .class_if(active, "chip-active")
            .attr("type", "button")
            .attr("data-action", "select-category")
            .attr("data-category", category.label())
            .attr("aria-pressed", active.to_string())
            .text(category.label())
    });
    el("div").class("chips").attr("role", "group").children(chips)
}

fn empty_state() -> Element {
    el("div")
        .class("empty-state")
        .child(el("p").class("lead").text("No courses found"))
        .child(
            el("button")
                .class("btn btn-outline")
                .attr("type", "button")
                .attr("data-action", "clear-filters")
                .text("Clear Filters"),
        )
}

pub fn courses(ctx: &ViewContext) -> Node {
    let hero = PageHero {
        reveal_id: HEADER_ID,
        eyebrow: None,
        title: "Explore Our",
        highlight: "Courses",
        break_before_highlight: false,
        lead: LEAD,
        centered: false,
    };

    let filters = el("section").class("filter-bar").child(
        el("div")
            .class("container filter-row")
            .child(search_box(ctx))
            .child(category_chips(ctx)),
    );

    let results = &ctx.catalog.results;
    let cards = results
        .iter()
        .enumerate()
        .map(|(i, course)| course_card(ctx, course, i, CardStyle::Catalog));
    let grid = el("section").class("section-tight").child(
        el("div")
            .class("container")
            .child(
                el("p")
                    .class("muted result-count")
                    .attr("aria-live", "polite")
                    .text(format!("Showing {} courses", results.len())),
            )
            .child(el("div").class("grid grid-4").children(cards))
            .maybe_child(results.is_empty().then(empty_state)),
    );

    fragment([hero.render(ctx).into(), filters.into(), grid.into()])
}
