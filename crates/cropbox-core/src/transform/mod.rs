//! Crop rectangle transforms: handle drags and bounds clamping.
//!
//! A drag step runs in two stages:
//! 1. [`transform_rect`] applies the pointer delta for the active handle.
//!    The result is unconstrained and may have a negative size.
//! 2. [`clamp_rect`] pulls the rectangle back inside the bounds and enforces
//!    the minimum size.
//!
//! # Coordinate System
//!
//! - Coordinates are in canvas units, origin at the top-left corner
//! - `x` grows to the right, `y` grows downwards

mod clamp;
mod drag;

pub use clamp::{clamp_rect, clamp_rect_with_min, MinSize, DEFAULT_MIN_SIZE};
pub use drag::transform_rect;
