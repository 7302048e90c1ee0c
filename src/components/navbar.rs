//! Fixed site header.
//!
//! Transparent at the top of the page, glass once the page scrolls past the
//! threshold. Below the desktop breakpoint the links collapse into a menu
//! toggled by the hamburger button; following a link closes it.

use crate::theme::Variant;
use crate::catalog;
use crate::motion::transform::css_number;
use crate::types::Icon;
use crate::view::{el, icon, Element, Node, ViewContext};

use super::button_link;

/// Two-tone brand mark linking home.
pub fn brand(ctx: &ViewContext, uppercase: bool) -> Element {
    let (first, rest) = ctx.config.brand_parts();
    let (first, rest) = if uppercase {
        (first.to_uppercase(), rest.to_uppercase())
    } else {
        (first.to_string(), rest.to_string())
    };
    let initial = first.chars().next().map(String::from).unwrap_or_default();

    el("a")
        .class("brand")
        .attr("href", ctx.href("/"))
        .child(el("span").class("brand-mark").text(initial))
        .child(
            el("span")
                .class("brand-name")
                .text(first)
                .child(el("span").class("brand-accent").text(rest)),
        )
}

fn nav_link(ctx: &ViewContext, name: &str, href: &str, class: &str) -> Element {
    let active = ctx.route.nav_href() == Some(href);
    el("a")
        .class(class)
        .class_if(active, "is-active")
        .attr("href", ctx.href(href))
        .attr("data-nav", href)
        .text(name)
}

fn account_actions(ctx: &ViewContext, class: &str, sign_in_variant: Variant) -> Element {
    el("div")
        .class(class)
        .child(button_link(ctx, "/login", sign_in_variant, "Sign In"))
        .child(button_link(ctx, "/register", Variant::Hero, "Get Started"))
}

fn mobile_menu(ctx: &ViewContext) -> Element {
    let links = catalog::nav_links().iter().enumerate().map(|(i, link)| {
        nav_link(ctx, &link.name, &link.href, "nav-mobile-link")
            .style(format!("animation-delay: {}s;", css_number(i as f64 * 0.05)))
    });
    el("div")
        .class("nav-mobile glass")
        .attr("id", "mobile-menu")
        .child(
            el("nav")
                .class("container nav-mobile-links")
                .children(links)
                .child(account_actions(ctx, "nav-mobile-actions", Variant::Outline)),
        )
}

pub fn navbar(ctx: &ViewContext) -> Node {
    let state = ctx.navbar;
    let toggle_icon = if state.menu_open { Icon::X } else { Icon::Menu };

    el("header")
        .class("site-header")
        .class(if state.scrolled { "glass is-scrolled" } else { "is-top" })
        .class_if(state.menu_open, "menu-open")
        .child(
            el("div")
                .class("container nav-bar")
                .child(brand(ctx, true))
                .child(
                    el("nav")
                        .class("nav-desktop")
                        .children(
                            catalog::nav_links()
                                .iter()
                                .map(|link| nav_link(ctx, &link.name, &link.href, "nav-link link-underline")),
                        ),
                )
                .child(account_actions(ctx, "nav-actions", Variant::Ghost))
                .child(
                    el("button")
                        .class("nav-toggle")
                        .attr("type", "button")
                        .attr("data-action", "toggle-menu")
                        .attr("aria-controls", "mobile-menu")
                        .attr("aria-expanded", state.menu_open.to_string())
                        .attr("aria-label", "Toggle menu")
                        .child(icon(toggle_icon, 24, "")),
                ),
        )
        .maybe_child(state.menu_open.then(|| mobile_menu(ctx)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;

    fn setup(config: &SiteConfig) -> ViewContext<'_> {
        ViewContext::settled(config, Route::Courses)
    }

    #[test]
    fn test_transparent_at_top() {
        let config = SiteConfig::default();
        let ctx = setup(&config);
        let html = navbar(&ctx).render();
        assert!(html.contains("site-header is-top"));
        assert!(!html.contains("id=\"mobile-menu\""));
        assert!(html.contains("ARTVINCE<span class=\"brand-accent\">ACADEMY</span>"));
    }

    #[test]
    fn test_glass_when_scrolled() {
        let config = SiteConfig::default();
        let mut ctx = setup(&config);
        ctx.navbar.scrolled = true;
        assert!(navbar(&ctx).render().contains("site-header glass is-scrolled"));
    }

    #[test]
    fn test_menu_open_renders_mobile_links() {
        let config = SiteConfig::default();
        let mut ctx = setup(&config);
        ctx.navbar.menu_open = true;
        let node = navbar(&ctx);
        let mobile = node.find_all(&|e| e.has_class("nav-mobile-link"));
        assert_eq!(mobile.len(), 5);
        let toggle = node.find_by_attr("data-action", "toggle-menu").unwrap();
        assert_eq!(toggle.get_attr("aria-expanded"), Some("true"));
    }

    #[test]
    fn test_active_link_follows_route() {
        let config = SiteConfig::default();
        let ctx = setup(&config);
        let node = navbar(&ctx);
        let active = node.find_all(&|e| e.has_class("is-active"));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].get_attr("data-nav"), Some("/courses"));
    }
}
