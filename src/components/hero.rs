//! Home page hero.
//!
//! The only pointer-reactive section. The content block tilts with the
//! smoothed pointer and drifts down and fades as the page scrolls through
//! the hero; floating particles and the glow orbs parallax behind it. All
//! values come precomputed in [`MotionView`](crate::view::MotionView).
//!
//! Entrance is a mount animation rather than a scroll reveal, so the hero
//! registers no reveal targets.

use crate::theme::Variant;
use crate::catalog;
use crate::motion::transform::{css_number, hero_particles};
use crate::types::Icon;
use crate::view::{el, icon, Element, Node, ViewContext};

use super::arrow_link;

/// Element id the platform tracks for pointer offset and scroll progress.
pub const HERO_ID: &str = "hero";

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=1920&auto=format&fit=crop&q=80";
const BADGE: &str = "New courses available for 2024";
const SUBHEADLINE: &str = "Learn 3D Animation, Character Design, Game Development, and more from industry professionals who've worked on AAA titles.";

/// Title words from this index on get the gradient.
const GRADIENT_FROM: usize = 4;

fn particles(ctx: &ViewContext) -> Element {
    let items = hero_particles()
        .iter()
        .zip(ctx.motion.particles.iter())
        .map(|(particle, offset)| {
            el("div")
                .class("particle")
                .style(format!(
                    "left: {}%; top: {}%; animation-delay: {}s;",
                    css_number(particle.left),
                    css_number(particle.top),
                    css_number(particle.delay)
                ))
                .style(offset.to_css())
                .child(icon(particle.icon, particle.size, "text-primary-soft"))
        });
    el("div").class("hero-particles").attr("aria-hidden", "true").children(items)
}

fn glows(ctx: &ViewContext) -> Element {
    let placement = ["hero-glow-left glow-primary", "hero-glow-right glow-accent"];
    let orbs = ctx
        .motion
        .glows
        .iter()
        .zip(placement)
        .map(|(frame, class)| el("div").class("glow hero-glow").class(class).style(frame.to_css()));
    el("div")
        .class("hero-layers")
        .attr("aria-hidden", "true")
        .children(orbs)
        .child(el("div").class("grid-pattern hero-grid"))
        .child(particles(ctx))
}

fn title(ctx: &ViewContext) -> Element {
    let words = ctx.config.tagline.split_whitespace().enumerate().map(|(i, word)| {
        el("span")
            .class("hero-word")
            .class_if(i >= GRADIENT_FROM, "gradient-text")
            .style(format!("animation-delay: {}s;", css_number(0.3 + i as f64 * 0.05)))
            .text(word)
    });
    el("h1").class("hero-title").children(words)
}

fn stats() -> Element {
    let items = catalog::hero_stats().iter().enumerate().map(|(i, stat)| {
        el("div")
            .class("hero-stat")
            .style(format!("animation-delay: {}s;", css_number(0.6 + i as f64 * 0.1)))
            .maybe_child(stat.icon.map(|kind| icon(kind, 24, "hero-stat-icon")))
            .child(el("div").class("hero-stat-value gradient-text").text(stat.value.as_str()))
            .child(el("div").class("hero-stat-label").text(stat.label.as_str()))
    });
    el("div").class("hero-stats").children(items)
}

pub fn hero(ctx: &ViewContext) -> Node {
    let content = el("div")
        .class("container hero-content")
        .style(ctx.motion.hero.transform().to_css())
        .child(
            el("div")
                .class("hero-badge")
                .child(icon(Icon::Sparkles, 16, "text-primary"))
                .child(el("span").text(BADGE)),
        )
        .child(title(ctx))
        .child(el("p").class("hero-sub").text(SUBHEADLINE))
        .child(
            el("div")
                .class("hero-ctas")
                .child(arrow_link(ctx, "/courses", Variant::Premium, "Explore Courses"))
                .child(
                    el("a")
                        .class("btn btn-glass")
                        .attr("href", ctx.href("/about"))
                        .child(icon(Icon::Play, 20, ""))
                        .text("Watch Showreel"),
                ),
        )
        .child(stats());

    el("section")
        .class("hero hero-pattern")
        .attr("id", HERO_ID)
        .attr("data-track-pointer", HERO_ID)
        .attr("data-track-scroll", HERO_ID)
        .child(
            el("div")
                .class("hero-bg")
                .child(el("img").attr("src", HERO_IMAGE).attr("alt", ""))
                .child(el("div").class("hero-bg-fade")),
        )
        .child(glows(ctx))
        .child(content)
        .child(
            el("div")
                .class("scroll-indicator")
                .attr("aria-hidden", "true")
                .child(el("div").class("scroll-indicator-track").child(el("div").class("scroll-indicator-dot"))),
        )
        .into()
}
