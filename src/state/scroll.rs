//! Scroll Module - Window scroll state and container scroll progress
//!
//! - `is_scrolled` drives the navbar's glass style once the page leaves the top
//! - `scroll_progress` maps the window offset onto a container: 0 while the
//!   container's top is at or below the viewport top, 1 once its bottom has
//!   passed the viewport top
//!
//! Progress is always clamped to [0, 1].

use spark_signals::{derived, Derived, Signal};

/// Offset (px) past which the navbar switches to its scrolled style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// Whether the window has scrolled past `threshold`.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Reactive `is_scrolled` over the window offset signal.
pub fn scrolled_derived(scroll_y: Signal<f64>, threshold: f64) -> Derived<bool> {
    derived(move || is_scrolled(scroll_y.get(), threshold))
}

/// Scroll progress across a container spanning `[top, top + height)` in
/// document coordinates, for the window scrolled to `scroll_y`.
pub fn scroll_progress(scroll_y: f64, container_top: f64, container_height: f64) -> f64 {
    if container_height <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    ((scroll_y - container_top) / container_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0, SCROLLED_THRESHOLD));
        assert!(!is_scrolled(20.0, SCROLLED_THRESHOLD));
        assert!(is_scrolled(20.5, SCROLLED_THRESHOLD));
    }

    #[test]
    fn test_scrolled_derived_follows_signal() {
        let y = signal(0.0);
        let scrolled = scrolled_derived(y.clone(), SCROLLED_THRESHOLD);
        assert!(!scrolled.get());

        y.set(300.0);
        assert!(scrolled.get());

        y.set(5.0);
        assert!(!scrolled.get());
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 0.0, 800.0), 0.0);
        assert_eq!(scroll_progress(400.0, 0.0, 800.0), 0.5);
        assert_eq!(scroll_progress(800.0, 0.0, 800.0), 1.0);
        assert_eq!(scroll_progress(5000.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn test_progress_before_container() {
        assert_eq!(scroll_progress(100.0, 600.0, 400.0), 0.0);
        assert_eq!(scroll_progress(700.0, 600.0, 400.0), 0.25);
    }

    #[test]
    fn test_progress_degenerate() {
        assert_eq!(scroll_progress(100.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 0.0, 100.0), 0.0);
    }
}
