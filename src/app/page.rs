//! Per-page state.
//!
//! A [`PageState`] is created when its route becomes current and dropped
//! when the visitor leaves. Everything it registers (reveal observations,
//! listeners, clock subscriptions) goes into its [`CleanupScope`], so
//! dropping the page releases all of it.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::catalog;
use crate::components::hero::HERO_ID;
use crate::filter::CourseFilter;
use crate::form::{ContactForm, Field};
use crate::motion::MotionSignals;
use crate::pages;
use crate::router::Route;
use crate::state::pointer::normalize;
use crate::state::scroll::scroll_progress;
use crate::state::{CleanupScope, EventMask, PlatformEvent, RevealLatch};
use crate::types::Rect;
use crate::view::{CatalogView, ContactView, MotionView};

use super::Services;

pub(crate) struct PageState {
    route: Route,
    reveals: Vec<(String, RevealLatch)>,
    filter: Option<CourseFilter>,
    form: Option<ContactForm>,
    motion: Option<MotionSignals>,
    scope: CleanupScope,
}

impl PageState {
    pub(crate) fn mount(route: Route, services: &Services) -> Self {
        let mut scope = CleanupScope::new();

        let mut reveals = Vec::new();
        for (id, options) in pages::reveal_targets(&route) {
            let (latch, unobserve) = services.observer.observe(id.clone(), options);
            scope.push(unobserve);
            let observer = services.observer.clone();
            let forget = id.clone();
            scope.push(move || observer.forget_bounds(&forget));
            reveals.push((id, latch));
        }

        let filter = route
            .initial_category()
            .map(|category| CourseFilter::with_category(catalog::courses(), category));

        let form = (route == Route::Contact).then(|| ContactForm::new(services.toasts.clone()));

        let motion = if route == Route::Home {
            let (signals, detach) = MotionSignals::smoothed(
                &services.inputs,
                services.config.hero_spring,
                services.config.scroll_spring,
                &services.clock,
            );
            scope.push(detach);
            track_hero(services, &mut scope);
            Some(signals)
        } else {
            None
        };

        log::debug!(
            "mounted {} ({} reveals, {} cleanups)",
            route.path(),
            reveals.len(),
            scope.len()
        );
        Self {
            route,
            reveals,
            filter,
            form,
            motion,
            scope,
        }
    }

    pub(crate) fn route(&self) -> &Route {
        &self.route
    }

    pub(crate) fn filter(&self) -> Option<&CourseFilter> {
        self.filter.as_ref()
    }

    pub(crate) fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    /// Ids whose latch has triggered.
    pub(crate) fn revealed(&self) -> HashSet<String> {
        self.reveals
            .iter()
            .filter(|(_, latch)| latch.is_triggered())
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub(crate) fn catalog_view(&self) -> Option<CatalogView> {
        self.filter.as_ref().map(|filter| CatalogView {
            query: filter.query(),
            category: filter.category(),
            results: filter.results(),
        })
    }

    pub(crate) fn contact_view(&self) -> Option<ContactView> {
        self.form.as_ref().map(|form| ContactView {
            name: form.value(Field::Name),
            email: form.value(Field::Email),
            subject: form.value(Field::Subject),
            message: form.value(Field::Message),
        })
    }

    pub(crate) fn motion_view(&self) -> Option<MotionView> {
        self.motion.as_ref().map(MotionView::from_signals)
    }
}

impl Drop for PageState {
    fn drop(&mut self) {
        log::debug!("unmounting {} ({} cleanups)", self.route.path(), self.scope.len());
    }
}

/// Feed the hero's pointer offset and scroll progress from platform events.
///
/// The hero box is kept in document coordinates so scrolling does not
/// require a fresh bounds report.
fn track_hero(services: &Services, scope: &mut CleanupScope) {
    let hero: Rc<Cell<Option<Rect>>> = Rc::new(Cell::new(None));

    let inputs = services.inputs.clone();
    let bounds = hero.clone();
    scope.push(services.listeners.on(EventMask::LAYOUT | EventMask::SCROLL, move |event| {
        let scroll_y = inputs.scroll_y.get();
        match event {
            PlatformEvent::Bounds { id, rect } if id == HERO_ID => {
                bounds.set(Some(Rect {
                    top: rect.top + scroll_y,
                    ..*rect
                }));
            }
            PlatformEvent::Scroll { .. } => {}
            _ => return,
        }
        if let Some(doc) = bounds.get() {
            inputs
                .scroll_progress
                .set(scroll_progress(scroll_y, doc.top, doc.height));
        }
    }));

    // Moves outside the hero leave the last offset in place.
    let inputs = services.inputs.clone();
    scope.push(services.listeners.on(EventMask::POINTER, move |event| {
        let (PlatformEvent::PointerMove { x, y }, Some(doc)) = (event, hero.get()) else {
            return;
        };
        let client = Rect {
            top: doc.top - inputs.scroll_y.get(),
            ..doc
        };
        if client.contains(*x, *y) {
            inputs.pointer.set(normalize(*x, *y, client));
        }
    }));
}
