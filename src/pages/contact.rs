//! Contact page: channels and the contact form.
//!
//! The form posts nowhere. Field values render from
//! [`ContactView`](crate::view::ContactView) so a cleared form after submit
//! shows empty inputs again.

use crate::catalog;
use crate::components::{observe, reveal, Entrance, RevealTarget};
use crate::form::Field;
use crate::state::RevealOptions;
use crate::types::Icon;
use crate::view::{el, fragment, icon, Element, Node, ViewContext};

use super::PageHero;

pub const HEADER_ID: &str = "contact-hero";
pub const CHANNELS_ID: &str = "contact-channels";
pub const FORM_ID: &str = "contact-form";

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![
        (HEADER_ID.to_string(), RevealOptions::HEADER),
        (CHANNELS_ID.to_string(), RevealOptions::HEADER),
        (FORM_ID.to_string(), RevealOptions::SECTION),
    ]
}

fn channels(ctx: &ViewContext) -> Element {
    let cards = catalog::contact_channels().iter().enumerate().map(|(i, channel)| {
        let card = el("div")
            .class("card card-interactive channel text-center")
            .child(el("div").class("feature-icon").child(icon(channel.icon, 24, "text-primary")))
            .child(el("h3").text(channel.title.as_str()))
            .child(el("p").class("channel-details").text(channel.details.as_str()))
            .child(el("p").class("muted small").text(channel.description.as_str()));
        reveal(ctx, CHANNELS_ID, Entrance::Rise, i as f64 * 0.1, card)
    });
    el("section")
        .class("section-tight")
        .child(el("div").class("container").child(observe(CHANNELS_ID, el("div").class("grid grid-3").children(cards))))
}

fn field(ctx: &ViewContext, field: Field) -> Element {
    let value = ctx.contact.value(field);
    let control = match field.input_type() {
        Some(kind) => el("input").attr("type", kind).attr("value", value),
        None => el("textarea").attr("rows", "6").text(value),
    };
    let control = control
        .class("input")
        .attr("id", field.name())
        .attr("name", field.name())
        .attr("placeholder", field.placeholder())
        .attr("data-action", "set-field")
        .attr("data-field", field.name())
        .flag("required");
    el("div")
        .class("field")
        .child(el("label").attr("for", field.name()).text(field.label()))
        .child(control)
}

fn form(ctx: &ViewContext) -> Element {
    let header = el("div")
        .class("form-header")
        .child(el("div").class("feature-icon").child(icon(Icon::MessageSquare, 20, "text-primary")))
        .child(
            el("div")
                .child(el("h2").text("Send us a Message"))
                .child(el("p").class("muted").text("Fill out the form below and we'll get back to you.")),
        );
    let form = el("form")
        .class("contact-form")
        .attr("data-action", "submit-contact")
        .child(
            el("div")
                .class("grid grid-2")
                .child(field(ctx, Field::Name))
                .child(field(ctx, Field::Email)),
        )
        .child(field(ctx, Field::Subject))
        .child(field(ctx, Field::Message))
        .child(
            el("button")
                .class("btn btn-hero btn-block")
                .attr("type", "submit")
                .text("Send Message")
                .child(icon(Icon::Send, 18, "")),
        );
    let card = el("div").class("card form-card").child(header).child(form);
    el("section").class("section").child(
        el("div")
            .class("container container-narrow")
            .child(observe(FORM_ID, reveal(ctx, FORM_ID, Entrance::Lift, 0.0, card))),
    )
}

pub fn contact(ctx: &ViewContext) -> Node {
    let hero = PageHero {
        reveal_id: HEADER_ID,
        eyebrow: Some("Get in Touch"),
        title: "Let's Start a",
        highlight: "Conversation",
        break_before_highlight: true,
        lead: "Have questions about our courses? Want to discuss partnership opportunities? We'd love to hear from you.",
        centered: true,
    };
    fragment([hero.render(ctx).into(), channels(ctx).into(), form(ctx).into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;

    fn setup(config: &SiteConfig) -> ViewContext<'_> {
        ViewContext::settled(config, Route::Contact)
    }

    #[test]
    fn test_all_fields_required() {
        let config = SiteConfig::default();
        let page = contact(&setup(&config));
        let controls = page.find_all(&|e| e.get_attr("data-action") == Some("set-field"));
        assert_eq!(controls.len(), 4);
        assert!(controls.iter().all(|c| c.get_attr("required").is_some()));
        let message = page.find_by_attr("id", "message");
        assert_eq!(message.map(|e| e.tag()), Some("textarea"));
    }

    #[test]
    fn test_values_render_from_context() {
        let config = SiteConfig::default();
        let mut ctx = setup(&config);
        ctx.contact.email = "ada@example.com".to_string();
        ctx.contact.message = "Hi <there>".to_string();
        let html = contact(&ctx).render();
        assert!(html.contains(r#"value="ada@example.com""#));
        assert!(html.contains("Hi &lt;there&gt;</textarea>"));
    }

    #[test]
    fn test_submit_hook_and_copy() {
        let config = SiteConfig::default();
        let page = contact(&setup(&config));
        assert!(page.find_by_attr("data-action", "submit-contact").is_some());
        let text = page.text_content();
        assert!(text.contains("Send us a Message"));
        assert!(text.contains("Send Message"));
    }
}
