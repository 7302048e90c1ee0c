//! Site footer: brand blurb, contact lines, socials and link columns.

use crate::catalog;
use crate::types::{Icon, LinkColumn};
use crate::view::{el, icon, Element, Node, ViewContext};

use super::navbar::brand;

const BLURB: &str = "Empowering the next generation of game developers, 3D artists, and creative designers with industry-leading education.";
const EMAIL: &str = "hello@artvinceacademy.com";
const LOCATION: &str = "San Francisco, CA";

fn contact_line(kind: Icon, value: &str) -> Element {
    el("div")
        .class("footer-contact-line")
        .child(icon(kind, 16, "text-primary"))
        .child(el("span").text(value))
}

fn link_column(ctx: &ViewContext, column: &LinkColumn) -> Element {
    el("div")
        .class("footer-column")
        .child(el("h4").text(column.title.as_str()))
        .child(el("ul").children(column.links.iter().map(|link| {
            el("li").child(el("a").attr("href", ctx.href(&link.href)).text(link.name.as_str()))
        })))
}

pub fn footer(ctx: &ViewContext) -> Node {
    let socials = catalog::social_links().iter().map(|social| {
        el("a")
            .class("social-link")
            .attr("href", social.href.as_str())
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .attr("aria-label", social.label.as_str())
            .child(icon(social.icon, 18, ""))
    });

    let brand_column = el("div")
        .class("footer-brand")
        .child(brand(ctx, false))
        .child(el("p").class("muted").text(BLURB))
        .child(
            el("div")
                .class("footer-contact")
                .child(contact_line(Icon::Mail, EMAIL))
                .child(contact_line(Icon::MapPin, LOCATION)),
        )
        .child(el("div").class("footer-socials").children(socials));

    el("footer")
        .class("site-footer")
        .child(
            el("div")
                .class("footer-glows")
                .attr("aria-hidden", "true")
                .child(el("div").class("glow glow-primary footer-glow-left"))
                .child(el("div").class("glow glow-accent footer-glow-right")),
        )
        .child(
            el("div")
                .class("container footer-inner")
                .child(
                    el("div")
                        .class("footer-grid")
                        .child(brand_column)
                        .children(catalog::footer_columns().iter().map(|c| link_column(ctx, c))),
                )
                .child(
                    el("div")
                        .class("footer-bottom")
                        .child(el("p").text(format!(
                            "\u{a9} {} {}. All rights reserved.",
                            ctx.config.copyright_year, ctx.config.brand_name
                        )))
                        .child(el("p").text("Crafted with passion for the creative community.")),
                ),
        )
        .into()
}
