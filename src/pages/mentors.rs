//! Mentor directory.

use crate::catalog;
use crate::components::mentor_card::{self, mentor_card};
use crate::components::{cta, RevealTarget};
use crate::state::RevealOptions;
use crate::view::{el, fragment, Node, ViewContext};

use super::PageHero;

pub const HEADER_ID: &str = "mentors-hero";

pub fn reveal_targets() -> Vec<RevealTarget> {
    let mut targets = vec![(HEADER_ID.to_string(), RevealOptions::HEADER)];
    targets.extend(mentor_card::reveal_targets(catalog::mentors()));
    targets.extend(cta::reveal_targets());
    targets
}

pub fn mentors(ctx: &ViewContext) -> Node {
    let hero = PageHero {
        reveal_id: HEADER_ID,
        eyebrow: Some("Learn from the Best"),
        title: "Meet Our Expert",
        highlight: "Mentors",
        break_before_highlight: true,
        lead: "Industry veterans from AAA studios who've shipped blockbuster games and now dedicate themselves to training the next generation of creators.",
        centered: true,
    };
    let cards = catalog::mentors()
        .iter()
        .enumerate()
        .map(|(i, mentor)| mentor_card(ctx, mentor, i));
    let grid = el("section")
        .class("section")
        .child(el("div").class("container").child(el("div").class("grid grid-3").children(cards)));

    fragment([hero.render(ctx).into(), grid.into(), cta::cta(ctx)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;

    #[test]
    fn test_six_mentor_cards() {
        let config = SiteConfig::default();
        let page = mentors(&ViewContext::settled(&config, Route::Mentors));
        assert_eq!(page.find_all(&|e| e.has_class("mentor-card")).len(), 6);
        assert!(page.text_content().contains("Meet Our Expert"));
        assert_eq!(reveal_targets().len(), 8);
    }
}
