//! Events Module - Platform event types and listener registry
//!
//! The platform (browser shell or test harness) feeds raw events in; the
//! registry fans them out to whichever listeners asked for that kind.
//!
//! # Example
//!
//! ```
//! use artvince_site::state::{EventListeners, EventMask, PlatformEvent};
//!
//! let listeners = EventListeners::new();
//! let cleanup = listeners.on(EventMask::SCROLL, |event| {
//!     if let PlatformEvent::Scroll { y } = event {
//!         assert_eq!(*y, 120.0);
//!     }
//! });
//!
//! assert_eq!(listeners.dispatch(&PlatformEvent::Scroll { y: 120.0 }), 1);
//! cleanup();
//! assert!(listeners.is_empty());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;

use super::Cleanup;
use crate::types::Rect;

// =============================================================================
// TYPES
// =============================================================================

/// Raw event delivered by the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Pointer moved, in viewport (client) coordinates.
    PointerMove { x: f64, y: f64 },
    /// Window scrolled to `y`.
    Scroll { y: f64 },
    /// Viewport resized.
    Resize { width: f64, height: f64 },
    /// Layout reported the viewport-relative bounds of an element.
    Bounds { id: String, rect: Rect },
    /// Animation frame; `dt` is seconds since the previous frame.
    Frame { dt: f64 },
}

bitflags! {
    /// Which event kinds a listener wants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        const POINTER = 0b0000_0001;
        const SCROLL  = 0b0000_0010;
        const RESIZE  = 0b0000_0100;
        const LAYOUT  = 0b0000_1000;
        const FRAME   = 0b0001_0000;
    }
}

impl PlatformEvent {
    /// Mask bit for this event kind.
    pub fn kind(&self) -> EventMask {
        match self {
            Self::PointerMove { .. } => EventMask::POINTER,
            Self::Scroll { .. } => EventMask::SCROLL,
            Self::Resize { .. } => EventMask::RESIZE,
            Self::Bounds { .. } => EventMask::LAYOUT,
            Self::Frame { .. } => EventMask::FRAME,
        }
    }
}

/// Event handler (Rc so dispatch can call it outside the registry borrow).
pub type EventHandler = Rc<dyn Fn(&PlatformEvent)>;

// =============================================================================
// REGISTRY
// =============================================================================

#[derive(Default)]
struct Registry {
    handlers: Vec<(usize, EventMask, EventHandler)>,
    next_id: usize,
}

/// Listener registry shared by every component of a mounted site.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventListeners {
    registry: Rc<RefCell<Registry>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the event kinds in `mask`.
    ///
    /// Returns a cleanup that removes the handler.
    pub fn on<F>(&self, mask: EventMask, handler: F) -> Cleanup
    where
        F: Fn(&PlatformEvent) + 'static,
    {
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.handlers.push((id, mask, Rc::new(handler)));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Box::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .handlers
                    .retain(|(handler_id, _, _)| *handler_id != id);
            }
        })
    }

    /// Deliver an event to every interested listener.
    ///
    /// Handlers run after the registry borrow is released, so a handler may
    /// register or remove listeners. Returns how many handlers ran.
    pub fn dispatch(&self, event: &PlatformEvent) -> usize {
        let kind = event.kind();
        let targets: Vec<EventHandler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .filter(|(_, mask, _)| mask.intersects(kind))
            .map(|(_, _, handler)| handler.clone())
            .collect();

        for handler in &targets {
            handler(event);
        }
        targets.len()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_kind_masks() {
        assert_eq!(PlatformEvent::PointerMove { x: 0.0, y: 0.0 }.kind(), EventMask::POINTER);
        assert_eq!(PlatformEvent::Frame { dt: 0.016 }.kind(), EventMask::FRAME);
        assert_eq!(
            PlatformEvent::Bounds { id: "hero".into(), rect: Rect::default() }.kind(),
            EventMask::LAYOUT
        );
    }

    #[test]
    fn test_dispatch_filters_by_mask() {
        let listeners = EventListeners::new();
        let pointer_hits = Rc::new(Cell::new(0));
        let any_hits = Rc::new(Cell::new(0));

        let p = pointer_hits.clone();
        let _c1 = listeners.on(EventMask::POINTER, move |_| p.set(p.get() + 1));
        let a = any_hits.clone();
        let _c2 = listeners.on(EventMask::all(), move |_| a.set(a.get() + 1));

        assert_eq!(listeners.dispatch(&PlatformEvent::Scroll { y: 10.0 }), 1);
        assert_eq!(listeners.dispatch(&PlatformEvent::PointerMove { x: 1.0, y: 2.0 }), 2);
        assert_eq!(pointer_hits.get(), 1);
        assert_eq!(any_hits.get(), 2);
    }

    #[test]
    fn test_cleanup_removes_only_its_handler() {
        let listeners = EventListeners::new();
        let c1 = listeners.on(EventMask::SCROLL, |_| {});
        let _c2 = listeners.on(EventMask::SCROLL, |_| {});
        assert_eq!(listeners.len(), 2);
        c1();
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_handler_can_unsubscribe_during_dispatch() {
        let listeners = EventListeners::new();
        let slot: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));
        let slot_inner = slot.clone();
        let cleanup = listeners.on(EventMask::FRAME, move |_| {
            if let Some(cleanup) = slot_inner.borrow_mut().take() {
                cleanup();
            }
        });
        *slot.borrow_mut() = Some(cleanup);

        assert_eq!(listeners.dispatch(&PlatformEvent::Frame { dt: 0.016 }), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_cleanup_after_registry_dropped_is_noop() {
        let listeners = EventListeners::new();
        let cleanup = listeners.on(EventMask::RESIZE, |_| {});
        drop(listeners);
        cleanup();
    }
}
