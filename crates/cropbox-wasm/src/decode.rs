//! Image loading WASM bindings.
//!
//! # Functions
//!
//! - [`load_image`] - Read a `File`/`Blob` and decode it (returns a Promise)
//! - [`decode_image`] - Decode bytes already in memory
//!
//! # Example
//!
//! ```typescript
//! import { load_image } from '@cropbox/wasm';
//!
//! const info = await load_image(input.files[0]);
//! canvas.width = info.width;
//! canvas.height = info.height;
//! ctx.putImageData(info.img(), 0, 0);
//! ```

use cropbox_core::decode::{self, LoadError};
use js_sys::Uint8Array;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Blob;

use crate::types::JsImageInfo;

/// Read a file and decode it into natural dimensions plus a drawable image.
///
/// The blob is read completely first, then decoded. The returned Promise
/// settles only after both steps.
///
/// # Errors
///
/// The Promise rejects with a message if:
/// - The blob cannot be read
/// - The bytes are not a supported image (JPEG, PNG, GIF, WebP, BMP) or are corrupted
#[wasm_bindgen]
pub async fn load_image(file: Blob) -> Result<JsImageInfo, JsValue> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| {
            JsValue::from_str(&format!(
                "Failed to read image data: {}",
                js_error_message(&e)
            ))
        })?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    debug!("Read {} bytes from blob", bytes.len());

    decode_image(&bytes)
}

/// Decode image bytes that are already in memory.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImageInfo, JsValue> {
    decode::decode_image(bytes)
        .map(JsImageInfo::from_info)
        .map_err(|e| JsValue::from_str(&LoadError::from(e).to_string()))
}

/// Best-effort text for a rejected JS promise value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
