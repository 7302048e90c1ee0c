//! Home page: hero, featured courses, features, testimonials, CTA.

use crate::components::{cta, featured, hero, testimonials, why_choose_us, RevealTarget};
use crate::view::{fragment, Node, ViewContext};

pub fn home(ctx: &ViewContext) -> Node {
    fragment([
        hero::hero(ctx),
        featured::featured_courses(ctx),
        why_choose_us::why_choose_us(ctx),
        testimonials::testimonials(ctx),
        cta::cta(ctx),
    ])
}

pub fn reveal_targets() -> Vec<RevealTarget> {
    let mut targets = featured::reveal_targets();
    targets.extend(why_choose_us::reveal_targets());
    targets.extend(testimonials::reveal_targets());
    targets.extend(cta::reveal_targets());
    targets
}
