//! Fallback page for unknown paths.

use crate::theme::Variant;
use crate::components::button_link;
use crate::view::{el, Node, ViewContext};

pub fn not_found(ctx: &ViewContext) -> Node {
    el("section")
        .class("not-found")
        .child(
            el("div")
                .class("container text-center")
                .child(el("h1").class("not-found-code gradient-text").text("404"))
                .child(el("p").class("lead").text("Oops! Page not found"))
                .child(button_link(ctx, "/", Variant::Premium, "Return to Home")),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;

    #[test]
    fn test_not_found_links_home() {
        let config = SiteConfig::default();
        let ctx = ViewContext::settled(&config, Route::NotFound("/nope".to_string()));
        let page = not_found(&ctx);
        assert!(page.text_content().contains("Oops! Page not found"));
        assert!(page.render().contains(r#"href="/""#));
    }
}
