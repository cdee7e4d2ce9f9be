use wasm_bindgen::JsValue;
use web_sys::Window;

use super::viewport_width;

/// Touch-capable or narrow viewport.
pub fn is_mobile_device(window: &Window, breakpoint_px: f64) -> bool {
    let has_touch_events =
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_events
        || window.navigator().max_touch_points() > 0
        || viewport_width(window) <= breakpoint_px
}
