//! Closing call-to-action, shared by home, mentors and about.

use crate::theme::Variant;
use crate::state::RevealOptions;
use crate::types::Icon;
use crate::view::{el, icon, Element, Node, ViewContext};

use super::{arrow_link, button_link, observe, reveal, Entrance, RevealTarget};

pub const REVEAL_ID: &str = "cta";

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![(REVEAL_ID.to_string(), RevealOptions::SECTION)]
}

pub fn cta(ctx: &ViewContext) -> Node {
    let step = |delay: f64, element: Element| reveal(ctx, REVEAL_ID, Entrance::Rise, delay, element);

    let inner = el("div")
        .class("cta-inner")
        .child(step(
            0.2,
            el("div")
                .class("pill")
                .child(icon(Icon::Sparkles, 16, "text-primary"))
                .child(el("span").text("Start your journey today")),
        ))
        .child(step(
            0.3,
            el("h2")
                .class("section-title")
                .text("Ready to Create")
                .child(el("br"))
                .child(el("span").class("gradient-text").text("Your Future?")),
        ))
        .child(step(
            0.4,
            el("p").class("lead").text(format!(
                "Join {} and unlock your potential in game development, 3D art, and creative design. Your dream career starts here.",
                ctx.config.brand_name
            )),
        ))
        .child(step(
            0.5,
            el("div")
                .class("cta-actions")
                .child(arrow_link(ctx, "/register", Variant::Hero, "Get Started Free"))
                .child(button_link(ctx, "/courses", Variant::Glass, "View All Courses")),
        ))
        .child(reveal(
            ctx,
            REVEAL_ID,
            Entrance::Fade,
            0.7,
            el("p").class("cta-trust").text("No credit card required \u{2022} 7-day free trial \u{2022} Cancel anytime"),
        ));

    let card = el("div")
        .class("cta-card")
        .child(el("div").class("glow glow-primary cta-glow-left").attr("aria-hidden", "true"))
        .child(el("div").class("glow glow-accent cta-glow-right").attr("aria-hidden", "true"))
        .child(inner);

    let section = el("section")
        .class("section cta")
        .child(el("div").class("cta-backdrop grid-pattern").attr("aria-hidden", "true"))
        .child(el("div").class("container").child(reveal(ctx, REVEAL_ID, Entrance::Zoom, 0.0, card)));
    observe(REVEAL_ID, section).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;

    #[test]
    fn test_cta_copy_and_links() {
        let config = SiteConfig::default();
        let ctx = ViewContext::settled(&config, Route::About);
        let node = cta(&ctx);
        let text = node.text_content();
        assert!(text.contains("Ready to Create"));
        assert!(text.contains("Join Artvince Academy and unlock"));
        assert!(node.render().contains(r#"href="/register""#));
        assert_eq!(node.find_all(&|e| e.get_attr("data-reveal") == Some(REVEAL_ID)).len(), 6);
    }
}
