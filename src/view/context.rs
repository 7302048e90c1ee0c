//! Render context: a plain snapshot of everything a page reads.
//!
//! The runtime fills a [`ViewContext`] from its signals before each render;
//! static export builds a settled one directly. Components never touch
//! signals themselves.

use std::collections::HashSet;

use crate::catalog;
use crate::config::SiteConfig;
use crate::filter::filter_courses;
use crate::form::Field;
use crate::motion::{GlowLayer, HeroFrame, HeroMotion, MotionSignals, ParticleLayer, Transform};
use crate::router::Route;
use crate::toast::Toast;
use crate::types::{Category, Course};

/// How entrance reveals render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    /// Follow latch state; untriggered content renders hidden.
    #[default]
    Live,
    /// Everything renders visible (static export, no script).
    Settled,
}

/// Navbar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarView {
    pub scrolled: bool,
    pub menu_open: bool,
}

/// Hero motion values for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionView {
    pub hero: HeroFrame,
    pub particles: Vec<Transform>,
    pub glows: Vec<Transform>,
}

impl MotionView {
    /// Pointer centered, page at the top.
    pub fn rest() -> Self {
        let signals = MotionSignals::fixed(0.0, 0.0, 0.0);
        Self::from_signals(&signals)
    }

    pub fn from_signals(signals: &MotionSignals) -> Self {
        Self {
            hero: HeroMotion::new(signals.clone()).frame(),
            particles: ParticleLayer::hero(signals.clone()).offsets(),
            glows: GlowLayer::hero(signals.clone()).frames(),
        }
    }
}

impl Default for MotionView {
    fn default() -> Self {
        Self::rest()
    }
}

/// Course catalog state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub query: String,
    pub category: Category,
    pub results: Vec<Course>,
}

impl CatalogView {
    /// Empty query with `category` selected.
    pub fn for_category(category: Category) -> Self {
        Self {
            query: String::new(),
            category,
            results: filter_courses(catalog::courses(), "", category)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::for_category(Category::All)
    }
}

/// Contact form field values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactView {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

/// Everything needed to render one page.
#[derive(Debug, Clone)]
pub struct ViewContext<'a> {
    pub config: &'a SiteConfig,
    pub route: Route,
    pub policy: RevealPolicy,
    /// Reveal ids whose latch has triggered.
    pub revealed: HashSet<String>,
    pub navbar: NavbarView,
    pub motion: MotionView,
    pub catalog: CatalogView,
    pub contact: ContactView,
    pub toasts: Vec<Toast>,
}

impl<'a> ViewContext<'a> {
    /// Fully revealed page at rest, as exported to static files.
    pub fn settled(config: &'a SiteConfig, route: Route) -> Self {
        let catalog = CatalogView::for_category(route.initial_category().unwrap_or_default());
        Self {
            config,
            route,
            policy: RevealPolicy::Settled,
            revealed: HashSet::new(),
            navbar: NavbarView::default(),
            motion: MotionView::rest(),
            catalog,
            contact: ContactView::default(),
            toasts: Vec::new(),
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        match self.policy {
            RevealPolicy::Settled => true,
            RevealPolicy::Live => self.revealed.contains(id),
        }
    }

    /// Site-relative link honoring the configured base URL.
    pub fn href(&self, path: &str) -> String {
        self.config.href(path)
    }
}
