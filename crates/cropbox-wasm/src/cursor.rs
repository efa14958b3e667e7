//! WASM bindings for cursor selection.
//!
//! The canvas is owned by the caller; these bindings only write its
//! `style.cursor` property.

use cropbox_core::cursor::{self, CursorSink, CursorStyle};
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::types::handle_from_id;

/// Cursor sink backed by a canvas element's inline style.
struct CanvasCursor<'a>(&'a HtmlCanvasElement);

impl CursorSink for CanvasCursor<'_> {
    fn set_cursor(&mut self, style: CursorStyle) {
        if let Err(e) = self.0.style().set_property("cursor", style.as_str()) {
            warn!("Failed to set canvas cursor to {}: {:?}", style, e);
        }
    }
}

/// Set the canvas cursor for a crop handle.
///
/// # Arguments
///
/// * `canvas` - Canvas element the crop widget draws on
/// * `control` - Handle id (see `ControlType`); unknown ids show `auto`
///
/// # Example (TypeScript)
///
/// ```typescript
/// canvas.addEventListener('mousemove', (e) => {
///   set_mouse_cursor(canvas, hitTest(e));
/// });
/// ```
#[wasm_bindgen]
pub fn set_mouse_cursor(canvas: &HtmlCanvasElement, control: f64) {
    let mut sink = CanvasCursor(canvas);
    cursor::set_mouse_cursor(&mut sink, handle_from_id(control));
}

/// Get the CSS cursor token for a crop handle without touching the DOM.
#[wasm_bindgen]
pub fn cursor_for(control: f64) -> String {
    cursor::cursor_for_handle(handle_from_id(control))
        .as_str()
        .to_string()
}
