//! Pages - One render function per route
//!
//! Every page shares the same frame: navbar, `<main>`, footer and the toast
//! viewport. [`document`] wraps that frame into a full HTML document;
//! [`reveal_targets`] lists the scroll reveals the runtime must observe
//! while a page is mounted.
//!
//! # Example
//!
//! ```
//! use artvince_site::config::SiteConfig;
//! use artvince_site::pages;
//! use artvince_site::router::Route;
//! use artvince_site::view::ViewContext;
//!
//! let config = SiteConfig::default();
//! let ctx = ViewContext::settled(&config, Route::Mentors);
//! let html = pages::document(&ctx);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<title>Mentors | Artvince Academy</title>"));
//! ```

pub mod about;
pub mod contact;
pub mod courses;
pub mod home;
pub mod mentors;
pub mod not_found;

use crate::components::footer::footer;
use crate::components::navbar::navbar;
use crate::components::toaster::toaster;
use crate::components::{observe, reveal, Entrance, RevealTarget};
use crate::router::Route;
use crate::view::{el, Element, Node, ViewContext};

/// Path of the generated stylesheet.
pub const STYLESHEET: &str = "/styles.css";

/// Main content for the current route.
pub fn page_body(ctx: &ViewContext) -> Node {
    match &ctx.route {
        Route::Home => home::home(ctx),
        Route::Courses | Route::CourseCategory(_) => courses::courses(ctx),
        Route::About => about::about(ctx),
        Route::Mentors => mentors::mentors(ctx),
        Route::Contact => contact::contact(ctx),
        Route::NotFound(_) => not_found::not_found(ctx),
    }
}

/// Reveal observations the page needs while mounted.
pub fn reveal_targets(route: &Route) -> Vec<RevealTarget> {
    match route {
        Route::Home => home::reveal_targets(),
        Route::Courses | Route::CourseCategory(_) => courses::reveal_targets(),
        Route::About => about::reveal_targets(),
        Route::Mentors => mentors::reveal_targets(),
        Route::Contact => contact::reveal_targets(),
        Route::NotFound(_) => Vec::new(),
    }
}

/// Navbar, main content, footer and toasts.
pub fn render_page(ctx: &ViewContext) -> Node {
    let main = el("main")
        .class("page")
        .class_if(ctx.route != Route::Home, "page-offset")
        .attr("data-route", ctx.route.path())
        .child(page_body(ctx));
    el("div")
        .class("site noise")
        .child(navbar(ctx))
        .child(main)
        .child(footer(ctx))
        .child(toaster(ctx))
        .into()
}

/// Complete HTML document for the current route.
pub fn document(ctx: &ViewContext) -> String {
    let title = format!("{} | {}", ctx.route.title(), ctx.config.brand_name);
    let head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text(title))
        .child(el("meta").attr("name", "description").attr("content", ctx.config.tagline.as_str()))
        .child(el("link").attr("rel", "stylesheet").attr("href", ctx.href(STYLESHEET)));
    let html: Node = el("html")
        .attr("lang", "en")
        .child(head)
        .child(el("body").child(render_page(ctx)))
        .into();

    let mut out = String::from("<!DOCTYPE html>\n");
    html.write(&mut out);
    out.push('\n');
    out
}

/// Top-of-page header shared by the inner pages.
pub(crate) struct PageHero<'a> {
    pub reveal_id: &'a str,
    pub eyebrow: Option<&'a str>,
    pub title: &'a str,
    pub highlight: &'a str,
    /// Put the highlight on its own line.
    pub break_before_highlight: bool,
    pub lead: &'a str,
    pub centered: bool,
}

impl PageHero<'_> {
    pub(crate) fn render(&self, ctx: &ViewContext) -> Element {
        let mut heading = el("h1").class("page-title").text(self.title);
        heading = if self.break_before_highlight {
            heading.child(el("br"))
        } else {
            heading.text(" ")
        };
        let heading = heading.child(el("span").class("gradient-text").text(self.highlight));

        let block = el("div")
            .class("page-hero-inner")
            .class_if(self.centered, "text-center")
            .maybe_child(self.eyebrow.map(|eyebrow| el("span").class("eyebrow").text(eyebrow)))
            .child(heading)
            .child(el("p").class("lead").text(self.lead));

        el("section").class("page-hero hero-pattern").child(
            el("div")
                .class("container")
                .child(observe(self.reveal_id, reveal(ctx, self.reveal_id, Entrance::Rise, 0.0, block))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::types::Category;
    use crate::view::RevealPolicy;

    fn setup(config: &SiteConfig, route: Route) -> ViewContext<'_> {
        ViewContext::settled(config, route)
    }

    #[test]
    fn test_every_static_route_renders_a_document() {
        let config = SiteConfig::default();
        for route in Route::static_routes() {
            let html = document(&setup(&config, route.clone()));
            assert!(html.contains(r#"<link rel="stylesheet" href="/styles.css">"#), "{route:?}");
            assert!(html.contains("site-header"), "{route:?}");
            assert!(html.contains("site-footer"), "{route:?}");
        }
    }

    #[test]
    fn test_every_reveal_target_is_observed_once() {
        let config = SiteConfig::default();
        let mut routes = Route::static_routes();
        routes.push(Route::NotFound("/missing".to_string()));
        for route in routes {
            let page = page_body(&setup(&config, route.clone()));
            for (id, _) in reveal_targets(&route) {
                let observed = page.find_all(&|e| e.get_attr("data-observe") == Some(id.as_str()));
                // Category routes render a subset of the catalog cards.
                if matches!(route, Route::CourseCategory(_)) {
                    assert!(observed.len() <= 1, "{route:?} {id}");
                } else {
                    assert_eq!(observed.len(), 1, "{route:?} {id}");
                }
            }
        }
    }

    #[test]
    fn test_every_gated_element_has_a_target() {
        let config = SiteConfig::default();
        for route in Route::static_routes() {
            let targets: Vec<String> = reveal_targets(&route).into_iter().map(|(id, _)| id).collect();
            let page = page_body(&setup(&config, route.clone()));
            for gated in page.find_all(&|e| e.get_attr("data-reveal").is_some()) {
                let id = gated.get_attr("data-reveal").unwrap_or_default();
                assert!(targets.iter().any(|t| t == id), "{route:?} {id}");
            }
        }
    }

    #[test]
    fn test_live_policy_hides_untriggered_content() {
        let config = SiteConfig::default();
        let mut ctx = setup(&config, Route::Mentors);
        ctx.policy = RevealPolicy::Live;
        let html = render_page(&ctx).render();
        assert!(!html.contains("is-visible"));

        ctx.revealed.insert("mentors-hero".to_string());
        let page = render_page(&ctx);
        assert_eq!(page.find_all(&|e| e.has_class("is-visible")).len(), 1);
    }

    #[test]
    fn test_category_route_title() {
        let config = SiteConfig::default();
        let html = document(&setup(&config, Route::CourseCategory(Category::WeaponDesign)));
        assert!(html.contains("<title>Weapon Design Courses | Artvince Academy</title>"));
    }
}
