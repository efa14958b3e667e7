//! Cropbox Core - crop widget helpers
//!
//! This crate provides the platform-independent pieces of an interactive
//! image-cropping widget: the crop rectangle model, drag-handle geometry,
//! bounds clamping, cursor selection and image loading.
//!
//! # Module Structure
//!
//! - [`cursor`] - Cursor token selection for a drag handle
//! - [`transform`] - Rectangle transform and clamping
//! - [`decode`] - Image decoding and the asynchronous loader
//!
//! A typical drag step applies [`transform_rect`] with the pointer delta and
//! then [`clamp_rect`] against the image bounds:
//!
//! ```ignore
//! use cropbox_core::{clamp_rect, transform_rect, HandleKind, Rect};
//!
//! let rect = Rect::new(10.0, 10.0, 200.0, 100.0);
//! let moved = transform_rect(rect, 5.0, -5.0, HandleKind::TopLeft);
//! let clamped = clamp_rect(moved, 800.0, 600.0, 800.0, 600.0);
//! ```

pub mod cursor;
pub mod decode;
pub mod transform;

pub use cursor::{cursor_for_handle, set_mouse_cursor, CursorSink, CursorStyle};
pub use decode::{decode_image, load_image, DecodeError, DecodedImage, ImageInfo, LoadError};
pub use transform::{clamp_rect, clamp_rect_with_min, transform_rect, MinSize};

/// The part of the crop rectangle a pointer drag manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum HandleKind {
    /// No manipulation in progress.
    #[default]
    Normal,
    /// Whole-rectangle drag.
    Move,
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl HandleKind {
    /// Every handle kind, in discriminant order.
    pub const ALL: [HandleKind; 10] = [
        HandleKind::Normal,
        HandleKind::Move,
        HandleKind::TopLeft,
        HandleKind::TopCenter,
        HandleKind::TopRight,
        HandleKind::CenterLeft,
        HandleKind::CenterRight,
        HandleKind::BottomLeft,
        HandleKind::BottomCenter,
        HandleKind::BottomRight,
    ];

    /// Decode the numeric handle id used by JavaScript callers.
    ///
    /// Values:
    /// - 0 = Normal
    /// - 1 = Move
    /// - 2..=9 = TopLeft, TopCenter, TopRight, CenterLeft, CenterRight,
    ///   BottomLeft, BottomCenter, BottomRight
    ///
    /// Any other value maps to `Normal`.
    pub fn from_id(value: u32) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .unwrap_or(HandleKind::Normal)
    }
}

/// A crop rectangle: top-left corner plus extent.
///
/// Nothing is enforced on construction. Width and height may be negative
/// after [`transform_rect`]; [`clamp_rect`] restores the size floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_default_is_normal() {
        assert_eq!(HandleKind::default(), HandleKind::Normal);
    }

    #[test]
    fn test_handle_from_id() {
        assert_eq!(HandleKind::from_id(0), HandleKind::Normal);
        assert_eq!(HandleKind::from_id(1), HandleKind::Move);
        assert_eq!(HandleKind::from_id(2), HandleKind::TopLeft);
        assert_eq!(HandleKind::from_id(6), HandleKind::CenterRight);
        assert_eq!(HandleKind::from_id(9), HandleKind::BottomRight);
        // Unknown values default to Normal
        assert_eq!(HandleKind::from_id(10), HandleKind::Normal);
        assert_eq!(HandleKind::from_id(256), HandleKind::Normal);
        assert_eq!(HandleKind::from_id(258), HandleKind::Normal);
        assert_eq!(HandleKind::from_id(u32::MAX), HandleKind::Normal);
    }

    #[test]
    fn test_handle_from_id_matches_all_order() {
        for (i, handle) in HandleKind::ALL.iter().enumerate() {
            assert_eq!(HandleKind::from_id(i as u32), *handle);
        }
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(rect.right(), 210.0);
        assert_eq!(rect.bottom(), 120.0);
    }
}
