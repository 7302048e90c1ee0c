//! Course card, in the home page's featured style or the catalog style.

use crate::state::RevealOptions;
use crate::types::{format_count, Course, Icon};
use crate::view::{el, filled_icon, icon, Element, Node, ViewContext};

use super::{observe, reveal, Entrance, RevealTarget};

/// Card layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Home page: larger, featured courses span two grid cells.
    Featured,
    /// Catalog grid: compact, shows the level badge.
    Catalog,
}

impl CardStyle {
    fn reveal_prefix(&self) -> &'static str {
        match self {
            Self::Featured => "featured-course",
            Self::Catalog => "course",
        }
    }

    /// Stagger between neighbouring cards, in seconds.
    fn stagger(&self) -> f64 {
        match self {
            Self::Featured => 0.1,
            Self::Catalog => 0.05,
        }
    }
}

pub fn reveal_id(style: CardStyle, course_id: u32) -> String {
    format!("{}-{course_id}", style.reveal_prefix())
}

/// One card-margin observation per course.
pub fn reveal_targets(style: CardStyle, courses: &[Course]) -> Vec<RevealTarget> {
    courses
        .iter()
        .map(|course| (reveal_id(style, course.id), RevealOptions::CARD))
        .collect()
}

fn badge(class: &str, label: &str) -> Element {
    el("span").class("badge").class(class).text(label)
}

fn meta(course: &Course, size: u32) -> Element {
    el("div")
        .class("course-meta")
        .child(el("span").child(icon(Icon::Clock, size, "")).text(course.duration.as_str()))
        .child(el("span").child(icon(Icon::Users, size, "")).text(format_count(course.students)))
        .child(
            el("span")
                .class("rating")
                .child(filled_icon(Icon::Star, size, ""))
                .text(course.rating.to_string()),
        )
}

pub fn course_card(ctx: &ViewContext, course: &Course, index: usize, style: CardStyle) -> Node {
    let featured = style == CardStyle::Featured && course.featured;
    let id = reveal_id(style, course.id);
    let icon_size = if style == CardStyle::Featured { 14 } else { 12 };

    let media = el("div")
        .class("course-media")
        .class(if featured { "aspect-wide" } else { "aspect-video" })
        .child(el("img").attr("src", course.image.as_str()).attr("alt", course.title.as_str()).attr("loading", "lazy"))
        .child(el("div").class("course-media-fade"))
        .child(el("div").class("play-overlay").child(el("span").class("play-button").child(icon(Icon::Play, 24, ""))))
        .child(el("div").class("badge-slot badge-left").child(badge("badge-primary", course.category.label())))
        .maybe_child(featured.then(|| {
            el("div").class("badge-slot badge-right").child(
                el("span")
                    .class("badge badge-accent")
                    .child(filled_icon(Icon::Star, 12, ""))
                    .text("Featured"),
            )
        }))
        .maybe_child(match (style, course.level) {
            (CardStyle::Catalog, Some(level)) => {
                Some(el("div").class("badge-slot badge-right").child(badge("badge-secondary", level.label())))
            }
            _ => None,
        });

    let cta_label = match style {
        CardStyle::Featured => "View Course",
        CardStyle::Catalog => "View",
    };
    let body = el("div")
        .class("course-body")
        .child(el("h3").class("course-title").class_if(featured, "course-title-lg").text(course.title.as_str()))
        .child(el("p").class("course-instructor").text(format!("by {}", course.instructor)))
        .child(meta(course, icon_size))
        .child(
            el("div")
                .class("course-footer")
                .child(el("div").class("course-price").text(format!("${}", course.price)))
                .child(
                    el("a")
                        .class("btn btn-ghost btn-sm")
                        .attr("href", ctx.href(&format!("/courses/{}", course.id)))
                        .text(cta_label)
                        .child(icon(Icon::ArrowRight, 16, "btn-arrow")),
                ),
        );

    let card = el("article")
        .class("card card-interactive course-card")
        .class_if(style == CardStyle::Catalog, "course-card-compact")
        .class_if(featured, "course-card-featured")
        .attr("data-course-id", course.id.to_string())
        .child(media)
        .child(body);

    let entrance = match style {
        CardStyle::Featured => Entrance::Lift,
        CardStyle::Catalog => Entrance::Rise,
    };
    observe(&id, reveal(ctx, &id, entrance, index as f64 * style.stagger(), card)).into()
}
