//! State Module - Runtime state driven by the platform
//!
//! Reactive state that powers the site's interactivity:
//!
//! - **Events** - Platform event types and the listener registry
//! - **Viewport** - One-shot reveal latches for entrance animations
//! - **Pointer** - Normalized pointer offset within a container
//! - **Scroll** - Window scroll offset and container scroll progress
//! - **Animate** - Shared frame clock for springs and toasts
//!
//! Every registration returns a [`Cleanup`]. Callers own it and must run it
//! when the component that registered goes away.

pub mod animate;
pub mod events;
pub mod pointer;
pub mod scroll;
pub mod viewport;

use spark_signals::{signal, Signal};

pub use animate::FrameClock;
pub use events::{EventListeners, EventMask, PlatformEvent};
pub use pointer::PointerOffset;
pub use viewport::{RevealLatch, RevealOptions, RevealState, Viewport, ViewportObserver};

/// Cleanup function returned by every registration.
///
/// Call this to deregister and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

/// Collects cleanups for one owner and runs them all at once.
///
/// Pages and components push every registration here; dropping the scope
/// (or calling [`CleanupScope::run`]) releases them in reverse order.
#[derive(Default)]
pub struct CleanupScope {
    cleanups: Vec<Cleanup>,
}

impl CleanupScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a cleanup.
    pub fn push(&mut self, cleanup: impl FnOnce() + 'static) {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Number of held cleanups.
    pub fn len(&self) -> usize {
        self.cleanups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleanups.is_empty()
    }

    /// Run every cleanup, most recent first.
    pub fn run(&mut self) {
        while let Some(cleanup) = self.cleanups.pop() {
            cleanup();
        }
    }
}

impl Drop for CleanupScope {
    fn drop(&mut self) {
        self.run();
    }
}

// =============================================================================
// Shared input signals
// =============================================================================

/// Raw input signals written only by the platform dispatch.
///
/// Consumers receive clones (signals are shared handles) and only read.
#[derive(Clone)]
pub struct InputSignals {
    /// Pointer offset relative to the tracked container, in [-0.5, 0.5].
    pub pointer: Signal<PointerOffset>,
    /// Window scroll offset in CSS pixels.
    pub scroll_y: Signal<f64>,
    /// Scroll progress across the tracked container, in [0, 1].
    pub scroll_progress: Signal<f64>,
    /// Current viewport size.
    pub viewport: Signal<Viewport>,
}

impl InputSignals {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: signal(PointerOffset::CENTER),
            scroll_y: signal(0.0),
            scroll_progress: signal(0.0),
            viewport: signal(viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_cleanup_scope_runs_in_reverse() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut scope = CleanupScope::new();
        for i in 0..3 {
            let order = order.clone();
            scope.push(move || order.borrow_mut().push(i));
        }
        assert_eq!(scope.len(), 3);
        scope.run();
        assert_eq!(*order.borrow(), vec![2, 1, 0]);
        assert!(scope.is_empty());
    }

    #[test]
    fn test_cleanup_scope_runs_on_drop() {
        let ran = Rc::new(Cell::new(false));
        {
            let mut scope = CleanupScope::new();
            let ran = ran.clone();
            scope.push(move || ran.set(true));
        }
        assert!(ran.get());
    }
}
