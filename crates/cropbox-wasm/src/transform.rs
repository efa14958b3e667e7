//! WASM bindings for crop rectangle transforms.
//!
//! Rectangles are passed as plain `{ x, y, width, height }` objects.

use cropbox_core::transform::{self, MinSize};
use wasm_bindgen::prelude::*;

use crate::types::{handle_from_id, rect_from_js, rect_to_js};

/// Apply a pointer drag to a crop rectangle.
///
/// # Arguments
///
/// * `clip_rect` - Current rectangle
/// * `move_x` - Horizontal pointer delta since the last event
/// * `move_y` - Vertical pointer delta since the last event
/// * `control` - Handle being dragged (see `ControlType`)
///
/// # Returns
///
/// The new rectangle. It is not clamped; pass it to `limiting_clip_rect`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// let rect = get_clip_rect_transform_info(rect, dx, dy, ControlType.TransformTopLeft);
/// rect = limiting_clip_rect(rect, maxX, maxY, maxWidth, maxHeight);
/// ```
#[wasm_bindgen]
pub fn get_clip_rect_transform_info(
    clip_rect: JsValue,
    move_x: f64,
    move_y: f64,
    control: f64,
) -> Result<JsValue, JsValue> {
    let rect = rect_from_js(clip_rect)?;
    rect_to_js(transform::transform_rect(
        rect,
        move_x,
        move_y,
        handle_from_id(control),
    ))
}

/// Clamp a crop rectangle into bounds with a minimum size of 100 x 100.
#[wasm_bindgen]
pub fn limiting_clip_rect(
    clip_rect: JsValue,
    max_x: f64,
    max_y: f64,
    max_width: f64,
    max_height: f64,
) -> Result<JsValue, JsValue> {
    let rect = rect_from_js(clip_rect)?;
    rect_to_js(transform::clamp_rect(
        rect, max_x, max_y, max_width, max_height,
    ))
}

/// Clamp a crop rectangle into bounds with a custom minimum size.
///
/// `min_size` is `{ minWidth, minHeight }`; missing fields default to 100.
#[wasm_bindgen]
pub fn limiting_clip_rect_with_min(
    clip_rect: JsValue,
    max_x: f64,
    max_y: f64,
    max_width: f64,
    max_height: f64,
    min_size: JsValue,
) -> Result<JsValue, JsValue> {
    let rect = rect_from_js(clip_rect)?;
    let min: MinSize = serde_wasm_bindgen::from_value(min_size)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    rect_to_js(transform::clamp_rect_with_min(
        rect, max_x, max_y, max_width, max_height, min,
    ))
}

/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::types::ControlType;
    use cropbox_core::Rect;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TestMinSize {
        min_width: f64,
        min_height: f64,
    }

    fn js_rect(x: f64, y: f64, width: f64, height: f64) -> JsValue {
        rect_to_js(Rect::new(x, y, width, height)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_transform_top_left() {
        let result = get_clip_rect_transform_info(
            js_rect(10.0, 10.0, 200.0, 100.0),
            5.0,
            -5.0,
            ControlType::TransformTopLeft.id(),
        )
        .unwrap();

        assert_eq!(
            rect_from_js(result).unwrap(),
            Rect::new(15.0, 5.0, 195.0, 105.0)
        );
    }

    #[wasm_bindgen_test]
    fn test_limiting_clip_rect() {
        let result =
            limiting_clip_rect(js_rect(-10.0, 500.0, 50.0, 9999.0), 300.0, 300.0, 400.0, 400.0)
                .unwrap();

        assert_eq!(
            rect_from_js(result).unwrap(),
            Rect::new(0.0, 300.0, 100.0, 400.0)
        );
    }

    #[wasm_bindgen_test]
    fn test_limiting_clip_rect_with_min() {
        let min = serde_wasm_bindgen::to_value(&TestMinSize {
            min_width: 20.0,
            min_height: 30.0,
        })
        .unwrap();

        let result = limiting_clip_rect_with_min(
            js_rect(0.0, 0.0, 1.0, 1.0),
            100.0,
            100.0,
            100.0,
            100.0,
            min,
        )
        .unwrap();

        assert_eq!(rect_from_js(result).unwrap(), Rect::new(0.0, 0.0, 20.0, 30.0));
    }

    #[wasm_bindgen_test]
    fn test_invalid_rect_errors() {
        let result = limiting_clip_rect(JsValue::from_str("nope"), 1.0, 1.0, 1.0, 1.0);
        assert!(result.is_err());
    }
}
