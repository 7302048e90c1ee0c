//! Pointer Module - Normalized pointer offset within a container
//!
//! The hero section tracks the pointer relative to its own bounds. The raw
//! client position is converted to an offset from the container center,
//! each axis in [-0.5, 0.5]: `-0.5` is the left/top edge, `0.5` the
//! right/bottom edge.
//!
//! # Example
//!
//! ```
//! use artvince_site::state::pointer::{normalize, PointerOffset};
//! use artvince_site::types::Rect;
//!
//! let rect = Rect::new(0.0, 0.0, 1000.0, 800.0);
//! assert_eq!(normalize(500.0, 400.0, rect), PointerOffset::CENTER);
//! assert_eq!(normalize(1000.0, 0.0, rect), PointerOffset { x: 0.5, y: -0.5 });
//! ```

use crate::types::Rect;

/// Lower bound of a normalized axis.
pub const MIN_OFFSET: f64 = -0.5;
/// Upper bound of a normalized axis.
pub const MAX_OFFSET: f64 = 0.5;

/// Pointer position relative to a container center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Build an offset, clamping each axis into range.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_axis(x),
            y: clamp_axis(y),
        }
    }
}

fn clamp_axis(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(MIN_OFFSET, MAX_OFFSET)
}

/// Convert a client position into an offset from `rect`'s center.
///
/// Positions outside the container clamp to the nearest edge. A container
/// with no area yields the center.
pub fn normalize(client_x: f64, client_y: f64, rect: Rect) -> PointerOffset {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return PointerOffset::CENTER;
    }
    PointerOffset::new(
        (client_x - rect.left) / rect.width - 0.5,
        (client_y - rect.top) / rect.height - 0.5,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_corners() {
        let rect = Rect::new(100.0, 50.0, 400.0, 200.0);
        assert_eq!(normalize(100.0, 50.0, rect), PointerOffset { x: -0.5, y: -0.5 });
        assert_eq!(normalize(500.0, 250.0, rect), PointerOffset { x: 0.5, y: 0.5 });
        assert_eq!(normalize(300.0, 150.0, rect), PointerOffset::CENTER);
    }

    #[test]
    fn test_normalize_quarter() {
        let rect = Rect::new(0.0, 0.0, 400.0, 400.0);
        let offset = normalize(100.0, 300.0, rect);
        assert!((offset.x + 0.25).abs() < 1e-12);
        assert!((offset.y - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_outside_container_clamps() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(normalize(-500.0, 900.0, rect), PointerOffset { x: -0.5, y: 0.5 });
    }

    #[test]
    fn test_empty_container_is_center() {
        assert_eq!(normalize(10.0, 10.0, Rect::new(0.0, 0.0, 0.0, 100.0)), PointerOffset::CENTER);
    }

    #[test]
    fn test_nan_axis_is_center() {
        assert_eq!(PointerOffset::new(f64::NAN, 0.2), PointerOffset { x: 0.0, y: 0.2 });
    }
}
