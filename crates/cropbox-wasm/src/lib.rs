//! Cropbox WASM - WebAssembly bindings for Cropbox
//!
//! This crate exposes the cropbox-core crop widget helpers to
//! JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - Handle ids, rectangle conversion and the loaded image wrapper
//! - `cursor` - Canvas cursor selection
//! - `transform` - Crop rectangle drag and clamp
//! - `decode` - Asynchronous image loading
//! - `logger` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { ControlType, get_clip_rect_transform_info, limiting_clip_rect,
//!   load_image, set_mouse_cursor } from '@cropbox/wasm';
//!
//! await init();
//!
//! const info = await load_image(file);
//! set_mouse_cursor(canvas, ControlType.Move);
//! rect = limiting_clip_rect(
//!   get_clip_rect_transform_info(rect, dx, dy, ControlType.Move),
//!   info.width - rect.width, info.height - rect.height, info.width, info.height,
//! );
//! ```

use wasm_bindgen::prelude::*;

mod cursor;
mod decode;
mod logger;
mod transform;
mod types;

// Re-export public types
pub use cursor::{cursor_for, set_mouse_cursor};
pub use decode::{decode_image, load_image};
pub use logger::set_log_level;
pub use transform::{
    get_clip_rect_transform_info, limiting_clip_rect, limiting_clip_rect_with_min,
};
pub use types::{ControlType, JsImageInfo};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(logger::DEFAULT_LEVEL);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
