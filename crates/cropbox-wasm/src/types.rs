//! WASM-compatible wrapper types.
//!
//! This module provides the JavaScript-facing handle enum, the decoded image
//! wrapper and the conversions between plain `{x, y, width, height}` objects
//! and the core `Rect`.

use cropbox_core::{DecodedImage, HandleKind, ImageInfo, Rect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::ImageData;

/// Crop handle ids, numbered the way the bindings accept them.
///
/// Functions take the id as a plain JS number so that unknown values,
/// including out-of-range and fractional ones, fall back to `Normal`
/// instead of failing the call or wrapping onto another handle.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlType {
    Normal = 0,
    Move = 1,
    TransformTopLeft = 2,
    TransformTopCenter = 3,
    TransformTopRight = 4,
    TransformCenterLeft = 5,
    TransformCenterRight = 6,
    TransformBottomLeft = 7,
    TransformBottomCenter = 8,
    TransformBottomRight = 9,
}

impl ControlType {
    /// The id as JavaScript passes it.
    pub(crate) fn id(self) -> f64 {
        f64::from(self as u8)
    }
}

impl From<ControlType> for HandleKind {
    fn from(control: ControlType) -> Self {
        handle_from_id(control.id())
    }
}

/// Convert a JS control id to the core handle kind.
///
/// Only the whole numbers 0..=9 select a handle; anything else, including
/// NaN and fractions, maps to `Normal`.
pub(crate) fn handle_from_id(id: f64) -> HandleKind {
    if id.fract() == 0.0 && (0.0..=9.0).contains(&id) {
        HandleKind::from_id(id as u32)
    } else {
        HandleKind::Normal
    }
}

/// Read a `{x, y, width, height}` object.
pub(crate) fn rect_from_js(value: JsValue) -> Result<Rect, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a `{x, y, width, height}` object.
pub(crate) fn rect_to_js(rect: Rect) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// A loaded image for JavaScript.
///
/// `width` and `height` are the natural dimensions. The pixels stay in WASM
/// memory until `img()` or `pixels()` copies them out.
#[wasm_bindgen]
pub struct JsImageInfo {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImageInfo {
    /// Natural image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Create a drawable `ImageData` for `putImageData` or `createImageBitmap`.
    ///
    /// Each call makes a new copy of the pixels.
    pub fn img(&self) -> Result<ImageData, JsValue> {
        ImageData::new_with_u8_clamped_array_and_sh(Clamped(&self.pixels), self.width, self.height)
    }

    /// Returns RGBA pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsImageInfo {
    pub(crate) fn from_info(info: ImageInfo) -> Self {
        let DecodedImage { pixels, .. } = info.image;
        Self {
            width: info.width,
            height: info.height,
            pixels,
        }
    }
}
