//! Student testimonials.

use crate::catalog;
use crate::state::RevealOptions;
use crate::types::{Icon, Testimonial};
use crate::view::{el, filled_icon, icon, Element, Node, ViewContext};

use super::{observe, reveal, section_header, Entrance, RevealTarget};

pub const REVEAL_ID: &str = "testimonials";

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![(REVEAL_ID.to_string(), RevealOptions::SECTION)]
}

fn testimonial_card(ctx: &ViewContext, testimonial: &Testimonial, index: usize) -> Element {
    let stars = (0..testimonial.rating).map(|_| filled_icon(Icon::Star, 16, "text-accent"));
    let card = el("figure")
        .class("card testimonial")
        .child(icon(Icon::Quote, 40, "testimonial-quote"))
        .child(el("div").class("stars").attr("aria-label", format!("{} stars", testimonial.rating)).children(stars))
        .child(el("blockquote").text(format!("\u{201c}{}\u{201d}", testimonial.content)))
        .child(
            el("figcaption")
                .class("testimonial-author")
                .child(el("img").attr("src", testimonial.avatar.as_str()).attr("alt", testimonial.author.as_str()))
                .child(
                    el("div")
                        .child(el("div").class("author-name").text(testimonial.author.as_str()))
                        .child(el("div").class("muted").text(testimonial.role.as_str())),
                ),
        );
    reveal(ctx, REVEAL_ID, Entrance::Lift, index as f64 * 0.15, card)
}

pub fn testimonials(ctx: &ViewContext) -> Node {
    let header = section_header(
        "Success Stories",
        "What Our",
        "Students Say",
        Some("Join thousands of students who've transformed their passion into profession."),
    );
    let cards = catalog::testimonials()
        .iter()
        .enumerate()
        .map(|(i, t)| testimonial_card(ctx, t, i));

    let section = el("section")
        .class("section testimonials")
        .child(
            el("div")
                .class("container")
                .child(reveal(ctx, REVEAL_ID, Entrance::Rise, 0.0, header))
                .child(el("div").class("grid grid-3").children(cards)),
        );
    observe(REVEAL_ID, section).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;

    #[test]
    fn test_star_count_matches_rating() {
        let config = SiteConfig::default();
        let ctx = ViewContext::settled(&config, Route::Home);
        let node = testimonials(&ctx);
        let cards = node.find_all(&|e| e.has_class("testimonial"));
        assert_eq!(cards.len(), 3);
        let html = node.render();
        assert_eq!(html.matches("text-accent").count(), 15);
        assert!(html.contains("Michael Torres"));
    }
}
