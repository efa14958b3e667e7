//! Bounds clamping for crop rectangles.
//!
//! Each field is clamped independently:
//!
//! - `x` and `y` are limited to `0..=max`
//! - `width` and `height` are limited to `max`, then raised to the minimum size
//!
//! The minimum size is applied last, so it wins when a maximum is smaller
//! than the floor. A crop rectangle never becomes smaller than the floor even
//! if that pushes it past `max_width`/`max_height`.

use serde::{Deserialize, Serialize};

use crate::Rect;

/// Default floor for crop width and height, in canvas units.
pub const DEFAULT_MIN_SIZE: f64 = 100.0;

/// Minimum crop rectangle size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MinSize {
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for MinSize {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_SIZE,
            min_height: DEFAULT_MIN_SIZE,
        }
    }
}

/// Clamp `rect` into the given bounds with the default 100 unit floor.
///
/// # Arguments
///
/// * `rect` - Rectangle to clamp, typically the output of `transform_rect`
/// * `max_x` - Largest allowed `x`
/// * `max_y` - Largest allowed `y`
/// * `max_width` - Largest allowed width (the floor still applies)
/// * `max_height` - Largest allowed height (the floor still applies)
///
/// # Example
///
/// ```ignore
/// let rect = Rect::new(-10.0, 500.0, 50.0, 9999.0);
/// let clamped = clamp_rect(rect, 300.0, 300.0, 400.0, 400.0);
/// assert_eq!(clamped, Rect::new(0.0, 300.0, 100.0, 400.0));
/// ```
pub fn clamp_rect(rect: Rect, max_x: f64, max_y: f64, max_width: f64, max_height: f64) -> Rect {
    clamp_rect_with_min(rect, max_x, max_y, max_width, max_height, MinSize::default())
}

/// Clamp `rect` into the given bounds with a caller-chosen size floor.
pub fn clamp_rect_with_min(
    rect: Rect,
    max_x: f64,
    max_y: f64,
    max_width: f64,
    max_height: f64,
    min: MinSize,
) -> Rect {
    Rect {
        x: rect.x.min(max_x).max(0.0),
        y: rect.y.min(max_y).max(0.0),
        width: rect.width.min(max_width).max(min.min_width),
        height: rect.height.min(max_height).max(min.min_height),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
