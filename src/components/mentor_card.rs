//! Mentor profile card.

use crate::state::RevealOptions;
use crate::types::{format_count, Icon, Mentor};
use crate::view::{el, icon, Element, Node, ViewContext};

use super::{observe, reveal, Entrance, RevealTarget};

pub fn reveal_id(mentor_id: u32) -> String {
    format!("mentor-{mentor_id}")
}

pub fn reveal_targets(mentors: &[Mentor]) -> Vec<RevealTarget> {
    mentors
        .iter()
        .map(|m| (reveal_id(m.id), RevealOptions::CARD))
        .collect()
}

fn social_link(href: &str, kind: Icon, label: &str) -> Element {
    el("a")
        .class("mentor-social")
        .attr("href", href)
        .attr("aria-label", label)
        .child(icon(kind, 16, ""))
}

fn stat(value: String, label: &str) -> Element {
    el("div")
        .child(el("span").class("stat-value").text(value))
        .child(el("span").class("muted").text(format!(" {label}")))
}

pub fn mentor_card(ctx: &ViewContext, mentor: &Mentor, index: usize) -> Node {
    let id = reveal_id(mentor.id);
    let card = el("article")
        .class("card card-interactive mentor-card")
        .attr("data-mentor-id", mentor.id.to_string())
        .child(
            el("div")
                .class("mentor-media")
                .child(el("img").attr("src", mentor.image.as_str()).attr("alt", mentor.name.as_str()).attr("loading", "lazy"))
                .child(el("div").class("mentor-media-fade"))
                .child(
                    el("div")
                        .class("mentor-socials")
                        .child(social_link(&mentor.social.twitter, Icon::Twitter, "Twitter"))
                        .child(social_link(&mentor.social.linkedin, Icon::Linkedin, "LinkedIn"))
                        .child(social_link(&mentor.social.website, Icon::Globe, "Website")),
                )
                .child(
                    el("div")
                        .class("mentor-overlay")
                        .child(el("span").class("badge badge-primary").text(mentor.role.as_str()))
                        .child(el("h3").text(mentor.name.as_str()))
                        .child(el("p").class("muted line-clamp-2").text(mentor.bio.as_str()))
                        .child(
                            el("div")
                                .class("mentor-stats")
                                .child(stat(mentor.courses.to_string(), "Courses"))
                                .child(stat(format_count(mentor.students), "Students")),
                        ),
                ),
        );
    observe(&id, reveal(ctx, &id, Entrance::Lift, index as f64 * 0.1, card)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::config::SiteConfig;
    use crate::router::Route;

    #[test]
    fn test_mentor_card_content() {
        let config = SiteConfig::default();
        let ctx = ViewContext::settled(&config, Route::Mentors);
        let mentor = &catalog::mentors()[5];
        let node = mentor_card(&ctx, mentor, 5);
        let text = node.text_content();
        assert!(text.contains("Lisa Wang"));
        assert!(text.contains("5,200 Students"));
        assert!(node.render().contains("transition-delay: 0.5s;"));
    }
}
