//! Viewport Module - One-shot visibility latches for entrance animations
//!
//! An element is observed against the viewport. The first time its bounds
//! intersect the viewport (shrunk by a negative margin so the trigger fires a
//! little before full entry), its latch moves from `Pending` to `Triggered`
//! and stays there for the lifetime of the owning component. Scrolling the
//! element back out never resets it.
//!
//! Triggered observations are dropped from the registry immediately; there
//! is nothing left to watch.
//!
//! # Example
//!
//! ```
//! use artvince_site::state::viewport::{RevealOptions, Viewport, ViewportObserver};
//! use artvince_site::types::Rect;
//!
//! let observer = ViewportObserver::new(Viewport::new(1280.0, 800.0));
//! let (latch, _cleanup) = observer.observe("courses-header", RevealOptions::CARD);
//! assert!(!latch.is_triggered());
//!
//! observer.report_bounds("courses-header", Rect::new(0.0, 400.0, 600.0, 200.0));
//! assert!(latch.is_triggered());
//!
//! // Scrolled far away again: still triggered.
//! observer.report_bounds("courses-header", Rect::new(0.0, 5000.0, 600.0, 200.0));
//! assert!(latch.is_triggered());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::Cleanup;
use crate::types::Rect;

// =============================================================================
// VIEWPORT
// =============================================================================

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether this viewport is below the navbar's desktop breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.width < 1024.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Whether `rect` intersects the viewport grown (positive) or shrunk
/// (negative) by `margin_px` on every side.
pub fn intersects(rect: Rect, viewport: Viewport, margin_px: f64) -> bool {
    let root_left = -margin_px;
    let root_top = -margin_px;
    let root_right = viewport.width + margin_px;
    let root_bottom = viewport.height + margin_px;

    if root_right <= root_left || root_bottom <= root_top {
        return false;
    }

    rect.left < root_right
        && rect.right() > root_left
        && rect.top < root_bottom
        && rect.bottom() > root_top
}

// =============================================================================
// LATCH
// =============================================================================

/// Latch state. Moves `Pending -> Triggered` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Triggered,
}

/// One-shot "has entered the viewport" flag.
///
/// Cloning yields another handle to the same latch.
#[derive(Clone)]
pub struct RevealLatch {
    state: Signal<RevealState>,
}

impl RevealLatch {
    /// A new latch in the `Pending` state.
    pub fn new() -> Self {
        Self {
            state: signal(RevealState::Pending),
        }
    }

    /// A latch that starts (and stays) triggered.
    pub fn triggered() -> Self {
        Self {
            state: signal(RevealState::Triggered),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn is_triggered(&self) -> bool {
        self.state.get() == RevealState::Triggered
    }

    /// Flip to `Triggered`. Returns true only on the actual transition.
    pub fn trigger(&self) -> bool {
        if self.is_triggered() {
            return false;
        }
        self.state.set(RevealState::Triggered);
        true
    }

    /// Underlying signal, for deriveds that gate on the latch.
    pub fn signal(&self) -> Signal<RevealState> {
        self.state.clone()
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Observation options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Margin applied to the viewport; negative fires before full entry.
    pub margin_px: f64,
}

impl RevealOptions {
    /// Page headers: fire as soon as any pixel is visible.
    pub const HEADER: Self = Self { margin_px: 0.0 };
    /// Cards in a grid.
    pub const CARD: Self = Self { margin_px: -50.0 };
    /// Whole home/about sections.
    pub const SECTION: Self = Self { margin_px: -100.0 };

    pub const fn margin(margin_px: f64) -> Self {
        Self { margin_px }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::HEADER
    }
}

// =============================================================================
// OBSERVER REGISTRY
// =============================================================================

struct Observation {
    token: usize,
    id: String,
    latch: RevealLatch,
    options: RevealOptions,
}

struct ObserverState {
    viewport: Viewport,
    bounds: HashMap<String, Rect>,
    observations: Vec<Observation>,
    next_token: usize,
}

/// Registry of observed elements for one mounted site.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone)]
pub struct ViewportObserver {
    state: Rc<RefCell<ObserverState>>,
}

impl ViewportObserver {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: Rc::new(RefCell::new(ObserverState {
                viewport,
                bounds: HashMap::new(),
                observations: Vec::new(),
                next_token: 0,
            })),
        }
    }

    /// Start observing element `id`.
    ///
    /// Returns the element's latch and a cleanup that stops observing. If
    /// bounds for `id` are already known, the latch is evaluated right away.
    pub fn observe(&self, id: impl Into<String>, options: RevealOptions) -> (RevealLatch, Cleanup) {
        let id = id.into();
        let latch = RevealLatch::new();

        let token = {
            let mut state = self.state.borrow_mut();
            let token = state.next_token;
            state.next_token += 1;
            state.observations.push(Observation {
                token,
                id: id.clone(),
                latch: latch.clone(),
                options,
            });
            token
        };

        self.evaluate(Some(&id));

        let state = Rc::downgrade(&self.state);
        let cleanup: Cleanup = Box::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().observations.retain(|o| o.token != token);
            }
        });
        (latch, cleanup)
    }

    /// Update the viewport size and re-evaluate every observation.
    pub fn set_viewport(&self, viewport: Viewport) {
        self.state.borrow_mut().viewport = viewport;
        self.evaluate(None);
    }

    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    /// Record the current viewport-relative bounds of element `id`.
    pub fn report_bounds(&self, id: &str, rect: Rect) {
        self.state.borrow_mut().bounds.insert(id.to_string(), rect);
        self.evaluate(Some(id));
    }

    /// Shift every known bound vertically (the window scrolled by `-dy`).
    pub fn scroll_by(&self, dy: f64) {
        {
            let mut state = self.state.borrow_mut();
            for rect in state.bounds.values_mut() {
                rect.top -= dy;
            }
        }
        self.evaluate(None);
    }

    /// Forget the bounds of an element that left the tree.
    pub fn forget_bounds(&self, id: &str) {
        self.state.borrow_mut().bounds.remove(id);
    }

    /// Number of still-pending observations.
    pub fn observed_count(&self) -> usize {
        self.state.borrow().observations.len()
    }

    /// Trigger every pending observation whose element is in view, then drop
    /// the triggered ones.
    fn evaluate(&self, only: Option<&str>) {
        let fired: Vec<(String, RevealLatch)> = {
            let mut state = self.state.borrow_mut();
            let viewport = state.viewport;
            let mut fired = Vec::new();
            let ObserverState { bounds, observations, .. } = &mut *state;

            observations.retain(|o| {
                if only.is_some_and(|id| id != o.id) {
                    return true;
                }
                let Some(rect) = bounds.get(&o.id) else {
                    return true;
                };
                if intersects(*rect, viewport, o.options.margin_px) {
                    fired.push((o.id.clone(), o.latch.clone()));
                    false
                } else {
                    true
                }
            });
            fired
        };

        // Signals are set outside the borrow so reactive readers may query us.
        for (id, latch) in fired {
            if latch.trigger() {
                log::debug!("reveal triggered: {id}");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn test_intersects_basic() {
        let vp = viewport();
        assert!(intersects(Rect::new(0.0, 100.0, 100.0, 100.0), vp, 0.0));
        assert!(!intersects(Rect::new(0.0, 900.0, 100.0, 100.0), vp, 0.0));
        assert!(!intersects(Rect::new(0.0, -300.0, 100.0, 100.0), vp, 0.0));
    }

    #[test]
    fn test_negative_margin_shrinks_viewport() {
        let vp = viewport();
        // Top edge 30px above the bottom of the viewport.
        let rect = Rect::new(0.0, 770.0, 100.0, 200.0);
        assert!(intersects(rect, vp, 0.0));
        assert!(!intersects(rect, vp, -50.0));
        // Positive margin grows it.
        assert!(intersects(Rect::new(0.0, 820.0, 100.0, 100.0), vp, 50.0));
    }

    #[test]
    fn test_degenerate_root_never_intersects() {
        let vp = Viewport::new(80.0, 80.0);
        assert!(!intersects(Rect::new(0.0, 0.0, 80.0, 80.0), vp, -50.0));
    }

    #[test]
    fn test_latch_transitions_once() {
        let latch = RevealLatch::new();
        assert_eq!(latch.state(), RevealState::Pending);
        assert!(latch.trigger());
        assert!(!latch.trigger());
        assert_eq!(latch.state(), RevealState::Triggered);
    }

    #[test]
    fn test_latch_clones_share_state() {
        let latch = RevealLatch::new();
        let other = latch.clone();
        latch.trigger();
        assert!(other.is_triggered());
    }

    #[test]
    fn test_observe_without_bounds_stays_pending() {
        let observer = ViewportObserver::new(viewport());
        let (latch, _cleanup) = observer.observe("card-1", RevealOptions::CARD);
        assert!(!latch.is_triggered());
        assert_eq!(observer.observed_count(), 1);
    }

    #[test]
    fn test_bounds_known_before_observe() {
        let observer = ViewportObserver::new(viewport());
        observer.report_bounds("hero", Rect::new(0.0, 0.0, 1000.0, 800.0));
        let (latch, _cleanup) = observer.observe("hero", RevealOptions::HEADER);
        assert!(latch.is_triggered());
        assert_eq!(observer.observed_count(), 0);
    }

    #[test]
    fn test_stays_triggered_after_scrolling_out() {
        let observer = ViewportObserver::new(viewport());
        let (latch, _cleanup) = observer.observe("values", RevealOptions::SECTION);

        observer.report_bounds("values", Rect::new(0.0, 1200.0, 1000.0, 600.0));
        assert!(!latch.is_triggered());

        observer.scroll_by(600.0);
        assert!(latch.is_triggered());

        observer.scroll_by(-2000.0);
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_scroll_respects_margin() {
        let observer = ViewportObserver::new(viewport());
        let (latch, _cleanup) = observer.observe("section", RevealOptions::SECTION);
        observer.report_bounds("section", Rect::new(0.0, 850.0, 1000.0, 400.0));

        // Top at 770: inside the viewport but not past the 100px margin.
        observer.scroll_by(80.0);
        assert!(!latch.is_triggered());

        // Top at 690: past it.
        observer.scroll_by(80.0);
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_cleanup_stops_observing() {
        let observer = ViewportObserver::new(viewport());
        let (latch, cleanup) = observer.observe("cta", RevealOptions::SECTION);
        cleanup();
        assert_eq!(observer.observed_count(), 0);

        observer.report_bounds("cta", Rect::new(0.0, 100.0, 100.0, 100.0));
        assert!(!latch.is_triggered());
    }

    #[test]
    fn test_resize_reevaluates() {
        let observer = ViewportObserver::new(viewport());
        let (latch, _cleanup) = observer.observe("footer", RevealOptions::HEADER);
        observer.report_bounds("footer", Rect::new(0.0, 900.0, 1000.0, 300.0));
        assert!(!latch.is_triggered());

        observer.set_viewport(Viewport::new(1000.0, 1000.0));
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_only_matching_id_is_evaluated() {
        let observer = ViewportObserver::new(viewport());
        let (a, _ca) = observer.observe("a", RevealOptions::HEADER);
        let (b, _cb) = observer.observe("b", RevealOptions::HEADER);
        observer.report_bounds("a", Rect::new(0.0, 10.0, 10.0, 10.0));
        assert!(a.is_triggered());
        assert!(!b.is_triggered());
        assert_eq!(observer.observed_count(), 1);
    }
}
