//! Toast viewport.

use crate::types::Icon;
use crate::view::{el, icon, Node, ViewContext};

pub fn toaster(ctx: &ViewContext) -> Node {
    let items = ctx.toasts.iter().map(|toast| {
        el("li")
            .class("toast")
            .attr("role", "status")
            .attr("data-toast-id", toast.id.to_string())
            .child(
                el("div")
                    .child(el("div").class("toast-title").text(toast.title.as_str()))
                    .child(el("div").class("toast-description").text(toast.description.as_str())),
            )
            .child(
                el("button")
                    .class("toast-close")
                    .attr("type", "button")
                    .attr("data-action", "dismiss-toast")
                    .attr("data-toast-id", toast.id.to_string())
                    .attr("aria-label", "Close")
                    .child(icon(Icon::X, 16, "")),
            )
    });
    el("ol")
        .class("toaster")
        .attr("aria-live", "polite")
        .children(items)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::router::Route;
    use crate::toast::Toast;

    #[test]
    fn test_toaster_lists_toasts() {
        let config = SiteConfig::default();
        let mut ctx = ViewContext::settled(&config, Route::Contact);
        assert_eq!(toaster(&ctx).render(), r#"<ol class="toaster" aria-live="polite"></ol>"#);

        ctx.toasts.push(Toast {
            id: 3,
            title: "Message Sent!".to_string(),
            description: "We'll get back to you as soon as possible.".to_string(),
        });
        let html = toaster(&ctx).render();
        assert!(html.contains("Message Sent!"));
        assert!(html.contains(r#"data-toast-id="3""#));
    }
}
