//! Home page featured courses section.

use crate::theme::Variant;
use crate::catalog;
use crate::state::RevealOptions;
use crate::view::{el, Node, ViewContext};

use super::course_card::{self, course_card, CardStyle};
use super::{arrow_link, observe, reveal, section_header, Entrance, RevealTarget};

pub const REVEAL_ID: &str = "featured";

pub fn reveal_targets() -> Vec<RevealTarget> {
    let mut targets = vec![(REVEAL_ID.to_string(), RevealOptions::SECTION)];
    targets.extend(course_card::reveal_targets(CardStyle::Featured, catalog::featured_courses()));
    targets
}

pub fn featured_courses(ctx: &ViewContext) -> Node {
    let header = section_header(
        "Learn from the best",
        "Featured",
        "Courses",
        Some("Hand-picked courses designed by industry professionals to accelerate your creative career."),
    );
    let cards = catalog::featured_courses()
        .iter()
        .enumerate()
        .map(|(i, course)| course_card(ctx, course, i, CardStyle::Featured));

    let section = el("section")
        .class("section featured")
        .child(el("div").class("section-glow").attr("aria-hidden", "true"))
        .child(
            el("div")
                .class("container")
                .child(reveal(ctx, REVEAL_ID, Entrance::Rise, 0.0, header))
                .child(el("div").class("grid grid-3 featured-grid").children(cards))
                .child(reveal(
                    ctx,
                    REVEAL_ID,
                    Entrance::Rise,
                    0.4,
                    el("div")
                        .class("section-footer")
                        .child(arrow_link(ctx, "/courses", Variant::Outline, "Browse All Courses")),
                )),
        );
    observe(REVEAL_ID, section).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;

    #[test]
    fn test_featured_renders_four_cards() {
        let config = SiteConfig::default();
        let ctx = ViewContext::settled(&config, Route::Home);
        let node = featured_courses(&ctx);
        assert_eq!(node.find_all(&|e| e.has_class("course-card")).len(), 4);
        assert_eq!(node.find_all(&|e| e.has_class("course-card-featured")).len(), 2);
        assert!(node.text_content().contains("Browse All Courses"));
    }

    #[test]
    fn test_targets_cover_section_and_cards() {
        let targets = reveal_targets();
        assert_eq!(targets.len(), 5);
        assert_eq!(targets[0], (REVEAL_ID.to_string(), RevealOptions::SECTION));
    }
}
