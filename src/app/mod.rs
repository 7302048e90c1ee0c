//! Mount API - Site runtime and render effect.
//!
//! [`mount`] wires the shared pieces together: raw input signals, the frame
//! clock, the viewport observer, the listener registry, the router and the
//! toast queue. The current page's own state lives in a `PageState` that
//! is swapped on every navigation.
//!
//! The platform shell feeds [`PlatformEvent`]s and decoded [`Action`]s into
//! [`MountHandle::dispatch`], and either calls [`MountHandle::render`] or
//! registers a sink with [`MountHandle::on_render`] to receive fresh HTML
//! whenever a signal the page reads changes.
//!
//! # Example
//!
//! ```
//! use artvince_site::app::{mount, Action};
//! use artvince_site::config::SiteConfig;
//! use artvince_site::state::PlatformEvent;
//!
//! let site = mount(SiteConfig::default(), "/courses");
//! site.dispatch(Action::Search("unity".to_string()));
//! assert!(site.render().contains("Showing 1 courses"));
//!
//! site.dispatch(PlatformEvent::Scroll { y: 400.0 });
//! assert!(site.render().contains("is-scrolled"));
//!
//! site.unmount();
//! ```

mod action;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;
use spark_signals::{effect, signal, Derived, Signal};

use crate::config::SiteConfig;
use crate::form::SubmitOutcome;
use crate::pages;
use crate::router::{Route, Router};
use crate::state::scroll::scrolled_derived;
use crate::state::{
    Cleanup, CleanupScope, EventListeners, EventMask, FrameClock, InputSignals, PlatformEvent, Viewport,
    ViewportObserver,
};
use crate::toast::{Toast, ToastQueue};
use crate::view::{CatalogView, ContactView, MotionView, NavbarView, RevealPolicy, ViewContext};

pub use action::{Action, SiteEvent};
use page::PageState;

bitflags! {
    /// Parts of the page an event may have changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Dirty: u8 {
        const ROUTE   = 0b0000_0001;
        const NAVBAR  = 0b0000_0010;
        const REVEAL  = 0b0000_0100;
        const MOTION  = 0b0000_1000;
        const CATALOG = 0b0001_0000;
        const FORM    = 0b0010_0000;
        const TOASTS  = 0b0100_0000;
    }
}

// =============================================================================
// Runtime
// =============================================================================

/// Shared services every page may register with.
pub(crate) struct Services {
    pub(crate) config: SiteConfig,
    pub(crate) inputs: InputSignals,
    pub(crate) clock: FrameClock,
    pub(crate) observer: ViewportObserver,
    pub(crate) listeners: EventListeners,
    pub(crate) toasts: ToastQueue,
}

struct Runtime {
    services: Services,
    router: Router,
    menu_open: Signal<bool>,
    scrolled: Derived<bool>,
    page: RefCell<Option<PageState>>,
    global: RefCell<CleanupScope>,
}

impl Runtime {
    fn context(&self) -> ViewContext<'_> {
        let config = &self.services.config;
        let route = self.router.current();
        let page = self.page.borrow();
        let page = page.as_ref().filter(|page| *page.route() == route);

        let mut ctx = ViewContext::settled(config, route);
        ctx.policy = RevealPolicy::Live;
        ctx.navbar = NavbarView {
            scrolled: self.scrolled.get(),
            menu_open: self.menu_open.get(),
        };
        ctx.toasts = self.services.toasts.visible();
        if let Some(page) = page {
            ctx.revealed = page.revealed();
            if let Some(catalog) = page.catalog_view() {
                ctx.catalog = catalog;
            }
            if let Some(contact) = page.contact_view() {
                ctx.contact = contact;
            }
            if let Some(motion) = page.motion_view() {
                ctx.motion = motion;
            }
        }
        ctx
    }

    fn render(&self) -> String {
        pages::document(&self.context())
    }

    /// Release the current page, then mount `route`.
    ///
    /// The old page goes first so its observed bounds are forgotten before
    /// the new page starts observing.
    fn swap_page(&self, route: Route) {
        let previous = self.page.borrow_mut().take();
        drop(previous);
        let next = PageState::mount(route, &self.services);
        *self.page.borrow_mut() = Some(next);
    }

    fn close_menu(&self) -> Dirty {
        if self.menu_open.get() {
            self.menu_open.set(false);
            Dirty::NAVBAR
        } else {
            Dirty::empty()
        }
    }

    fn navigate(&self, path: &str) -> Dirty {
        let dirty = self.close_menu();
        let next = Route::parse(path);
        if next == self.router.current() {
            return dirty;
        }
        self.swap_page(next);
        self.router.navigate(path);
        Dirty::all()
    }

    fn back(&self) -> Dirty {
        let Some(previous) = self.router.previous() else {
            return Dirty::empty();
        };
        self.close_menu();
        self.swap_page(previous);
        self.router.back();
        Dirty::all()
    }

    fn act(&self, action: Action) -> Dirty {
        match action {
            Action::Navigate(path) => return self.navigate(&path),
            Action::Back => return self.back(),
            Action::ToggleMenu => {
                self.menu_open.set(!self.menu_open.get());
                return Dirty::NAVBAR;
            }
            Action::DismissToast(id) => {
                return if self.services.toasts.dismiss(id) {
                    Dirty::TOASTS
                } else {
                    Dirty::empty()
                };
            }
            _ => {}
        }

        let page = self.page.borrow();
        let Some(page) = page.as_ref() else {
            return Dirty::empty();
        };
        match (action, page.filter(), page.form()) {
            (Action::Search(query), Some(filter), _) => {
                filter.set_query(query);
                Dirty::CATALOG
            }
            (Action::SelectCategory(category), Some(filter), _) => {
                filter.select_category(category);
                Dirty::CATALOG
            }
            (Action::ClearFilters, Some(filter), _) => {
                filter.reset();
                Dirty::CATALOG
            }
            (Action::SetField(field, value), _, Some(form)) => {
                form.set_field(field, value);
                Dirty::FORM
            }
            (Action::SubmitContact, _, Some(form)) => match form.submit() {
                SubmitOutcome::Sent => Dirty::FORM | Dirty::TOASTS,
                SubmitOutcome::Blocked { missing } => {
                    log::debug!("contact form blocked, {} required fields empty", missing.len());
                    Dirty::empty()
                }
            },
            (action, _, _) => {
                log::debug!("{action:?} has no effect on {}", page.route().path());
                Dirty::empty()
            }
        }
    }

    fn shutdown(&self) {
        let page = self.page.borrow_mut().take();
        drop(page);
        self.global.borrow_mut().run();
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Dropping it (or calling [`MountHandle::unmount`]) stops the render
/// effect and releases every registration.
pub struct MountHandle {
    runtime: Rc<Runtime>,
    stop_render: Option<Cleanup>,
}

impl MountHandle {
    /// Feed a platform event or a visitor action.
    ///
    /// Returns the parts of the page that may need repainting.
    pub fn dispatch(&self, event: impl Into<SiteEvent>) -> Dirty {
        match event.into() {
            SiteEvent::Platform(event) => {
                let kind = event.kind();
                self.runtime.services.listeners.dispatch(&event);
                let mut dirty = Dirty::empty();
                if kind.intersects(EventMask::SCROLL) {
                    dirty |= Dirty::NAVBAR | Dirty::REVEAL | Dirty::MOTION;
                }
                if kind.intersects(EventMask::RESIZE | EventMask::LAYOUT) {
                    dirty |= Dirty::REVEAL | Dirty::MOTION;
                }
                if kind.intersects(EventMask::POINTER) {
                    dirty |= Dirty::MOTION;
                }
                if kind.intersects(EventMask::FRAME) {
                    dirty |= Dirty::MOTION | Dirty::TOASTS;
                }
                dirty
            }
            SiteEvent::Action(action) => self.runtime.act(action),
        }
    }

    /// Current page as a complete HTML document.
    pub fn render(&self) -> String {
        self.runtime.render()
    }

    /// Call `sink` with fresh HTML now and whenever a signal the page reads
    /// changes. Replaces any previous sink.
    pub fn on_render<F>(&mut self, mut sink: F)
    where
        F: FnMut(String) + 'static,
    {
        if let Some(stop) = self.stop_render.take() {
            stop();
        }
        let runtime = self.runtime.clone();
        let stop = effect(move || sink(runtime.render()));
        self.stop_render = Some(Box::new(stop));
    }

    pub fn route(&self) -> Route {
        self.runtime.router.current()
    }

    pub fn history_len(&self) -> usize {
        self.runtime.router.history_len()
    }

    pub fn menu_open(&self) -> bool {
        self.runtime.menu_open.get()
    }

    pub fn is_scrolled(&self) -> bool {
        self.runtime.scrolled.get()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.runtime.services.toasts.visible()
    }

    /// Whether reveal `id` on the current page has triggered.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.runtime
            .page
            .borrow()
            .as_ref()
            .is_some_and(|page| page.revealed().contains(id))
    }

    /// Catalog state, when the current page is the catalog.
    pub fn catalog(&self) -> Option<CatalogView> {
        self.runtime.page.borrow().as_ref().and_then(|page| page.catalog_view())
    }

    /// Contact form values, when the current page is the contact page.
    pub fn contact(&self) -> Option<ContactView> {
        self.runtime.page.borrow().as_ref().and_then(|page| page.contact_view())
    }

    /// Hero motion values, when the current page is home.
    pub fn motion(&self) -> Option<MotionView> {
        self.runtime.page.borrow().as_ref().and_then(|page| page.motion_view())
    }

    /// Registered platform listeners.
    pub fn listener_count(&self) -> usize {
        self.runtime.services.listeners.len()
    }

    /// Reveal observations still waiting for their element.
    pub fn observed_count(&self) -> usize {
        self.runtime.services.observer.observed_count()
    }

    /// Frame clock subscribers.
    pub fn clock_subscribers(&self) -> usize {
        self.runtime.services.clock.subscriber_count()
    }

    /// Stop rendering and release everything.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(stop) = self.stop_render.take() {
            stop();
        }
        self.runtime.shutdown();
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the site at `initial_path`.
///
/// This sets up:
/// 1. Shared input signals and the frame clock
/// 2. Global listeners for scroll, resize, layout and frames
/// 3. The toast timer
/// 4. State for the initial page
pub fn mount(config: SiteConfig, initial_path: &str) -> MountHandle {
    let services = Services {
        inputs: InputSignals::new(Viewport::default()),
        clock: FrameClock::new(),
        observer: ViewportObserver::new(Viewport::default()),
        listeners: EventListeners::new(),
        toasts: ToastQueue::new(config.toast_seconds),
        config,
    };
    let mut global = CleanupScope::new();

    let inputs = services.inputs.clone();
    let observer = services.observer.clone();
    global.push(services.listeners.on(EventMask::SCROLL, move |event| {
        if let PlatformEvent::Scroll { y } = event {
            let previous = inputs.scroll_y.get();
            inputs.scroll_y.set(*y);
            observer.scroll_by(*y - previous);
        }
    }));

    let inputs = services.inputs.clone();
    let observer = services.observer.clone();
    global.push(services.listeners.on(EventMask::RESIZE, move |event| {
        if let PlatformEvent::Resize { width, height } = event {
            let viewport = Viewport::new(*width, *height);
            inputs.viewport.set(viewport);
            observer.set_viewport(viewport);
        }
    }));

    let observer = services.observer.clone();
    global.push(services.listeners.on(EventMask::LAYOUT, move |event| {
        if let PlatformEvent::Bounds { id, rect } = event {
            observer.report_bounds(id, *rect);
        }
    }));

    let clock = services.clock.clone();
    global.push(services.listeners.on(EventMask::FRAME, move |event| {
        if let PlatformEvent::Frame { dt } = event {
            clock.tick(*dt);
        }
    }));

    global.push(services.toasts.attach(&services.clock));

    let router = Router::new(initial_path);
    let scrolled = scrolled_derived(services.inputs.scroll_y.clone(), services.config.scrolled_threshold);
    let page = PageState::mount(router.current(), &services);
    log::info!("mounted {} at {}", services.config.brand_name, router.current().path());

    MountHandle {
        runtime: Rc::new(Runtime {
            services,
            router,
            menu_open: signal(false),
            scrolled,
            page: RefCell::new(Some(page)),
            global: RefCell::new(global),
        }),
        stop_render: None,
    }
}
