//! Generated stylesheet.
//!
//! [`stylesheet`] concatenates the palette variables, the static base
//! rules, one rule per button [`Variant`] and the reveal transitions.

use super::{Palette, Variant};
use crate::components::Entrance;

/// Entrance transition length in seconds.
pub const REVEAL_DURATION: f64 = 0.6;

const BASE: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { margin: 0; background: var(--background); color: var(--foreground); font-family: "Inter", system-ui, sans-serif; line-height: 1.6; -webkit-font-smoothing: antialiased; }
img { display: block; max-width: 100%; }
a { color: inherit; text-decoration: none; }
h1, h2, h3, h4 { font-family: "Space Grotesk", "Inter", sans-serif; line-height: 1.15; margin: 0 0 0.75rem; }
p { margin: 0 0 1rem; }
.icon { display: inline-block; vertical-align: middle; flex-shrink: 0; }
.muted { color: var(--muted-foreground); }
.small { font-size: 0.875rem; }
.text-center { text-align: center; }
.text-primary { color: var(--primary); }
.text-primary-soft { color: var(--primary-soft); }
.text-accent { color: var(--accent); }
.line-clamp-2 { display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.gradient-text { background: var(--gradient-brand); -webkit-background-clip: text; background-clip: text; color: transparent; }
.noise { position: relative; min-height: 100vh; }
.grid-pattern { background-image: linear-gradient(var(--glass-border) 1px, transparent 1px), linear-gradient(90deg, var(--glass-border) 1px, transparent 1px); background-size: 64px 64px; }
.hero-pattern { background: radial-gradient(ellipse at top, var(--primary-soft), transparent 60%); }
.glass { background: var(--glass); backdrop-filter: blur(16px); border-bottom: 1px solid var(--glass-border); }
.glow { position: absolute; border-radius: 9999px; filter: blur(64px); pointer-events: none; }
.glow-primary { background: var(--primary-soft); }
.glow-accent { background: var(--accent-soft); }

.container { width: 100%; max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; position: relative; }
.container-narrow { max-width: 768px; }
.section { position: relative; padding: 6rem 0; overflow: hidden; }
.section-tight { padding: 3rem 0; }
.section-band { position: relative; background: var(--card); border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); }
.stats-band { padding: 5rem 0; }
.section-glow { position: absolute; inset: 0; background: radial-gradient(circle at 50% 0%, var(--primary-soft), transparent 50%); pointer-events: none; }
.section-header { text-align: center; max-width: 48rem; margin: 0 auto 4rem; }
.section-title { font-size: clamp(2.25rem, 4vw, 3rem); }
.section-footer { text-align: center; margin-top: 3rem; }
.eyebrow { display: block; margin-bottom: 1rem; color: var(--primary); font-size: 0.875rem; font-weight: 500; letter-spacing: 0.1em; text-transform: uppercase; }
.lead { font-size: 1.25rem; color: var(--muted-foreground); }
.lead-sm { font-size: 1.125rem; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: 1fr; }
@media (min-width: 768px) { .grid-2, .grid-3, .grid-4 { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .grid-3 { grid-template-columns: repeat(3, 1fr); } .grid-4 { grid-template-columns: repeat(4, 1fr); } .grid { gap: 2rem; } }

.btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; padding: 0.75rem 1.5rem; border: 0; border-radius: 0.75rem; font: inherit; font-weight: 600; cursor: pointer; transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease; }
.btn:hover { transform: translateY(-1px); }
.btn-sm { padding: 0.4rem 0.75rem; font-size: 0.875rem; }
.btn-block { width: 100%; }
.btn-arrow { transition: transform 0.2s ease; }
.btn:hover .btn-arrow { transform: translateX(4px); }

.badge { display: inline-flex; align-items: center; gap: 0.25rem; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; backdrop-filter: blur(8px); }
.badge-primary { background: var(--primary); color: var(--foreground); }
.badge-accent { background: var(--accent); color: var(--foreground); }
.badge-secondary { background: var(--secondary); color: var(--foreground); }
.badge-slot { position: absolute; top: 1rem; }
.badge-left { left: 1rem; }
.badge-right { right: 1rem; }
.pill, .hero-badge { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 9999px; background: var(--glass); border: 1px solid var(--glass-border); font-size: 0.875rem; margin-bottom: 2rem; }

.card { position: relative; background: var(--card); border: 1px solid var(--border); border-radius: 1rem; overflow: hidden; }
.card-interactive { transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease; }
.card-interactive:hover { transform: translateY(-4px); border-color: var(--primary-soft); box-shadow: 0 20px 40px -20px var(--primary-soft); }

.site-header { position: fixed; inset: 0 0 auto 0; z-index: 50; transition: background 0.3s ease, padding 0.3s ease; }
.site-header.is-top { background: transparent; padding: 1.5rem 0; }
.site-header.is-scrolled { padding: 0.75rem 0; }
.nav-bar { display: flex; align-items: center; justify-content: space-between; gap: 2rem; }
.brand { display: inline-flex; align-items: center; gap: 0.75rem; font-weight: 700; }
.brand-mark { display: inline-grid; place-items: center; width: 2.5rem; height: 2.5rem; border-radius: 0.75rem; background: var(--gradient-brand); }
.brand-name { letter-spacing: 0.02em; }
.brand-accent { margin-left: 0.35rem; color: var(--primary); }
.nav-desktop, .nav-actions { display: none; align-items: center; gap: 2rem; }
.nav-link { color: var(--muted-foreground); font-weight: 500; }
.nav-link.is-active, .nav-link:hover { color: var(--foreground); }
.link-underline { position: relative; }
.link-underline::after { content: ""; position: absolute; left: 0; bottom: -4px; width: 0; height: 2px; background: var(--gradient-brand); transition: width 0.3s ease; }
.link-underline:hover::after, .link-underline.is-active::after { width: 100%; }
.nav-toggle { background: none; border: 0; color: var(--foreground); cursor: pointer; }
.site-header.menu-open { background: var(--glass); backdrop-filter: blur(16px); }
.nav-mobile { border-top: 1px solid var(--glass-border); }
.nav-mobile-links { display: flex; flex-direction: column; gap: 1rem; padding-top: 1.5rem; padding-bottom: 1.5rem; }
.nav-mobile-link { font-size: 1.125rem; animation: slide-in 0.3s ease both; }
.nav-mobile-link.is-active { color: var(--primary); }
.nav-mobile-actions { display: flex; flex-direction: column; gap: 0.75rem; padding-top: 1rem; border-top: 1px solid var(--border); }
@media (min-width: 1024px) { .nav-desktop, .nav-actions { display: flex; } .nav-toggle, .nav-mobile { display: none; } }

.page-offset { padding-top: 6rem; }
.page-hero { padding: 4rem 0 6rem; }
.page-hero-inner { max-width: 48rem; }
.page-hero-inner.text-center { margin: 0 auto; }
.page-title { font-size: clamp(2.25rem, 5vw, 3.75rem); margin-bottom: 1.5rem; }

.hero { position: relative; min-height: 100vh; display: flex; align-items: center; overflow: hidden; }
.hero-bg { position: absolute; inset: 0; }
.hero-bg img { width: 100%; height: 100%; object-fit: cover; opacity: 0.3; }
.hero-bg-fade { position: absolute; inset: 0; background: linear-gradient(to bottom, transparent, var(--background)); }
.hero-layers, .hero-particles, .hero-grid { position: absolute; inset: 0; pointer-events: none; }
.hero-grid { opacity: 0.3; }
.hero-glow { width: 24rem; height: 24rem; will-change: transform, opacity, filter; }
.hero-glow-left { top: 25%; left: 25%; }
.hero-glow-right { bottom: 25%; right: 25%; }
.particle { position: absolute; animation: float 6s ease-in-out infinite; will-change: transform; }
.hero-content { text-align: center; max-width: 64rem; will-change: transform, opacity; }
.hero-title { font-size: clamp(3rem, 7vw, 5.5rem); margin-bottom: 1.5rem; }
.hero-word { display: inline-block; margin-right: 0.25em; animation: word-in 0.5s ease both; }
.hero-sub { font-size: 1.25rem; color: var(--muted-foreground); max-width: 40rem; margin: 0 auto 2.5rem; }
.hero-ctas { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 4rem; }
.hero-stats { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
@media (min-width: 768px) { .hero-stats { grid-template-columns: repeat(4, 1fr); } }
.hero-stat { animation: word-in 0.5s ease both; }
.hero-stat-icon { color: var(--primary); margin-bottom: 0.5rem; }
.hero-stat-value { font-size: 2rem; font-weight: 700; }
.hero-stat-label { color: var(--muted-foreground); font-size: 0.875rem; }
.scroll-indicator { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); }
.scroll-indicator-track { width: 1.5rem; height: 2.5rem; border: 2px solid var(--muted-foreground); border-radius: 9999px; display: flex; justify-content: center; padding-top: 0.5rem; }
.scroll-indicator-dot { width: 0.25rem; height: 0.5rem; border-radius: 9999px; background: var(--muted-foreground); animation: bob 1.5s ease-in-out infinite; }

.course-media { position: relative; overflow: hidden; }
.aspect-video { aspect-ratio: 16 / 9; }
.aspect-wide { aspect-ratio: 2 / 1; }
.course-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
.course-card:hover .course-media img { transform: scale(1.1); }
.course-media-fade { position: absolute; inset: 0; background: linear-gradient(to top, var(--card), transparent); opacity: 0.6; }
.play-overlay { position: absolute; inset: 0; display: grid; place-items: center; opacity: 0; transition: opacity 0.3s ease; }
.course-card:hover .play-overlay { opacity: 1; }
.play-button { display: grid; place-items: center; width: 4rem; height: 4rem; border-radius: 9999px; background: var(--primary); }
.course-body { padding: 1.5rem; }
.course-card-compact .course-body { padding: 1.25rem; }
.course-title { font-size: 1.25rem; }
.course-title-lg { font-size: 1.5rem; }
.course-instructor { color: var(--muted-foreground); font-size: 0.875rem; }
.course-meta { display: flex; gap: 1rem; font-size: 0.875rem; color: var(--muted-foreground); margin-bottom: 1rem; }
.course-meta span { display: inline-flex; align-items: center; gap: 0.25rem; }
.rating { color: var(--accent); }
.course-footer { display: flex; align-items: center; justify-content: space-between; padding-top: 1rem; border-top: 1px solid var(--border); }
.course-price { font-size: 1.5rem; font-weight: 700; }
.featured-grid { margin-bottom: 1rem; }
@media (min-width: 1024px) { .course-card-featured { grid-column: span 2; } }

.feature-tile { padding: 2rem; }
.feature-icon { display: grid; place-items: center; width: 3.5rem; height: 3.5rem; border-radius: 0.75rem; background: linear-gradient(135deg, var(--primary-soft), var(--accent-soft)); margin-bottom: 1.25rem; transition: transform 0.3s ease; }
.feature-icon-lg { width: 4rem; height: 4rem; }
.feature-tile:hover .feature-icon { transform: scale(1.1); }
.statement { padding: 2.5rem; }
.stat-value-lg { font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 700; }

.testimonial { margin: 0; padding: 2rem; }
.testimonial-quote { position: absolute; top: 1.5rem; right: 1.5rem; color: var(--primary-soft); }
.stars { display: flex; gap: 0.25rem; margin-bottom: 1rem; }
.testimonial blockquote { margin: 0 0 1.5rem; font-size: 1.125rem; }
.testimonial-author { display: flex; align-items: center; gap: 1rem; }
.testimonial-author img { width: 3rem; height: 3rem; border-radius: 9999px; object-fit: cover; }
.author-name { font-weight: 600; }

.cta-backdrop { position: absolute; inset: 0; opacity: 0.2; }
.cta-card { padding: 4rem 2rem; border-radius: 1.5rem; background: var(--card); border: 1px solid var(--border); text-align: center; overflow: hidden; }
.cta-glow-left { top: -6rem; left: -6rem; width: 18rem; height: 18rem; }
.cta-glow-right { bottom: -6rem; right: -6rem; width: 18rem; height: 18rem; }
.cta-inner { position: relative; max-width: 48rem; margin: 0 auto; }
.cta-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin: 2rem 0; }
.cta-trust { font-size: 0.875rem; color: var(--muted-foreground); }

.mentor-media { position: relative; aspect-ratio: 4 / 5; overflow: hidden; }
.mentor-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
.mentor-card:hover .mentor-media img { transform: scale(1.05); }
.mentor-media-fade { position: absolute; inset: 0; background: linear-gradient(to top, var(--card), transparent 60%); }
.mentor-socials { position: absolute; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; opacity: 0; transition: opacity 0.3s ease; }
.mentor-card:hover .mentor-socials { opacity: 1; }
.mentor-social, .social-link { display: grid; place-items: center; width: 2.5rem; height: 2.5rem; border-radius: 0.75rem; background: var(--glass); border: 1px solid var(--glass-border); transition: color 0.2s ease, background 0.2s ease; }
.mentor-social:hover, .social-link:hover { color: var(--primary); }
.mentor-overlay { position: absolute; inset: auto 0 0 0; padding: 1.5rem; }
.mentor-stats { display: flex; gap: 1.5rem; font-size: 0.875rem; }
.stat-value { font-weight: 600; }

.filter-bar { position: sticky; top: 4rem; z-index: 30; padding: 2rem 0; background: var(--glass); backdrop-filter: blur(24px); border-bottom: 1px solid var(--border); }
.filter-row { display: flex; flex-direction: column; gap: 1.5rem; }
@media (min-width: 1024px) { .filter-row { flex-direction: row; align-items: center; justify-content: space-between; } }
.search { position: relative; width: 100%; max-width: 20rem; }
.search-icon { position: absolute; left: 0.75rem; top: 50%; transform: translateY(-50%); color: var(--muted-foreground); }
.search-input { padding-left: 2.5rem; }
.chips { display: flex; gap: 0.5rem; overflow-x: auto; }
.chip { padding: 0.5rem 1rem; border: 0; border-radius: 9999px; background: var(--secondary); color: var(--muted-foreground); font: inherit; font-size: 0.875rem; white-space: nowrap; cursor: pointer; transition: background 0.2s ease, color 0.2s ease; }
.chip:hover { color: var(--foreground); }
.chip-active { background: var(--primary); color: var(--foreground); }
.result-count { margin-bottom: 2rem; }
.empty-state { text-align: center; padding: 5rem 0; }

.input { width: 100%; padding: 0.75rem 1rem; border-radius: 0.75rem; border: 1px solid var(--border); background: var(--secondary); color: var(--foreground); font: inherit; }
.input:focus { outline: 2px solid var(--primary); outline-offset: 1px; }
textarea.input { resize: vertical; }
.contact-form { display: block; }
.field { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1.5rem; }
.field label { font-size: 0.875rem; font-weight: 500; }
.form-card { padding: 3rem; border-radius: 1.5rem; }
.form-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 2rem; }
.form-header .feature-icon { margin-bottom: 0; }
.channel { padding: 2rem; }
.channel .feature-icon { margin: 0 auto 1.25rem; }
.channel-details { font-weight: 500; margin-bottom: 0.25rem; }

.not-found { min-height: 70vh; display: grid; place-items: center; }
.not-found-code { font-size: 6rem; }

.site-footer { position: relative; overflow: hidden; border-top: 1px solid var(--border); background: var(--card); }
.footer-glows { position: absolute; inset: 0; pointer-events: none; }
.footer-glow-left { bottom: -8rem; left: -8rem; width: 20rem; height: 20rem; }
.footer-glow-right { top: -8rem; right: -8rem; width: 20rem; height: 20rem; }
.footer-inner { padding: 4rem 1.5rem; }
.footer-grid { display: grid; gap: 3rem; grid-template-columns: 1fr; }
@media (min-width: 768px) { .footer-grid { grid-template-columns: 2fr repeat(4, 1fr); } }
.footer-brand { max-width: 24rem; }
.footer-contact { display: flex; flex-direction: column; gap: 0.75rem; margin: 1.5rem 0; color: var(--muted-foreground); }
.footer-contact-line { display: flex; align-items: center; gap: 0.75rem; }
.footer-socials { display: flex; gap: 0.75rem; }
.footer-column h4 { font-size: 1rem; margin-bottom: 1rem; }
.footer-column ul { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
.footer-column a { color: var(--muted-foreground); }
.footer-column a:hover { color: var(--foreground); }
.footer-bottom { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; padding-top: 2rem; margin-top: 3rem; border-top: 1px solid var(--border); color: var(--muted-foreground); font-size: 0.875rem; }

.toaster { position: fixed; right: 1rem; bottom: 1rem; z-index: 100; list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.5rem; width: min(24rem, calc(100vw - 2rem)); }
.toast { display: flex; align-items: flex-start; justify-content: space-between; gap: 1rem; padding: 1rem 1.25rem; border-radius: 0.75rem; background: var(--card); border: 1px solid var(--border); box-shadow: 0 20px 40px -20px rgba(0, 0, 0, 0.6); animation: slide-in 0.3s ease both; }
.toast-title { font-weight: 600; }
.toast-description { color: var(--muted-foreground); font-size: 0.875rem; }
.toast-close { background: none; border: 0; color: var(--muted-foreground); cursor: pointer; }

@keyframes float { 0%, 100% { translate: 0 0; } 50% { translate: 0 -20px; } }
@keyframes bob { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(8px); } }
@keyframes word-in { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes slide-in { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: none; } }
"#;

/// Starting transform of each entrance.
fn entrance_transform(entrance: Entrance) -> &'static str {
    match entrance {
        Entrance::Rise => "translateY(30px)",
        Entrance::Lift => "translateY(50px)",
        Entrance::FromLeft => "translateX(-40px)",
        Entrance::FromRight => "translateX(40px)",
        Entrance::Zoom => "scale(0.95)",
        Entrance::Fade => "none",
    }
}

const ENTRANCES: [Entrance; 6] = [
    Entrance::Rise,
    Entrance::Lift,
    Entrance::FromLeft,
    Entrance::FromRight,
    Entrance::Zoom,
    Entrance::Fade,
];

fn reveal_rules() -> String {
    let mut out = format!(
        ".reveal {{ opacity: 0; transition: opacity {d}s ease-out, transform {d}s ease-out; }}\n",
        d = REVEAL_DURATION
    );
    for entrance in ENTRANCES {
        out.push_str(&format!(
            ".{} {{ transform: {}; }}\n",
            entrance.class(),
            entrance_transform(entrance)
        ));
    }
    out.push_str(".reveal.is-visible { opacity: 1; transform: none; }\n");
    out.push_str(
        "@media (prefers-reduced-motion: reduce) { .reveal { transition: none; transform: none; } .particle, .hero-word, .hero-stat { animation: none; } }\n",
    );
    out
}

/// Full stylesheet for `palette`.
pub fn stylesheet(palette: &Palette) -> String {
    let mut css = palette.css_variables();
    css.push_str(BASE);
    for variant in Variant::ALL {
        css.push_str(&format!(".{} {{ {} }}\n", variant.class(), variant.declarations()));
    }
    css.push_str(&reveal_rules());
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::pages;
    use crate::router::Route;
    use crate::view::ViewContext;
    use std::collections::BTreeSet;

    fn setup() -> String {
        stylesheet(&Palette::academy())
    }

    #[test]
    fn test_reveal_rules() {
        let css = setup();
        assert!(css.contains(".reveal { opacity: 0; transition: opacity 0.6s ease-out"));
        assert!(css.contains(".reveal-lift { transform: translateY(50px); }"));
        assert!(css.contains(".reveal.is-visible { opacity: 1; transform: none; }"));
    }

    #[test]
    fn test_every_variant_has_a_rule() {
        let css = setup();
        for variant in Variant::ALL {
            assert!(css.contains(&format!(".{} {{", variant.class())), "{variant:?}");
        }
    }

    #[test]
    fn test_rendered_classes_are_styled() {
        let css = setup();
        let config = SiteConfig::default();
        let mut classes = BTreeSet::new();
        for route in Route::static_routes() {
            let page = pages::render_page(&ViewContext::settled(&config, route));
            for element in page.find_all(&|e| e.get_attr("class").is_some()) {
                for class in element.get_attr("class").unwrap_or_default().split_whitespace() {
                    classes.insert(class.to_string());
                }
            }
        }
        // Marker classes with no rules of their own.
        let unstyled = ["featured", "why-choose-us", "testimonials"];
        let missing: Vec<&String> = classes
            .iter()
            .filter(|c| !unstyled.contains(&c.as_str()))
            .filter(|c| !css.contains(&format!(".{c}")))
            .collect();
        assert!(missing.is_empty(), "unstyled classes: {missing:?}");
    }
}
