//! Browser wiring: turns DOM events into calls on the gesture and state types.

pub mod device;
pub mod nav;
pub mod stepper;
pub mod style;
pub mod swipe;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, TouchEvent, Window};

use crate::error::Result;
use crate::gesture::{Confirm, Point, Reloader};

/// First active touch point of the event, in client coordinates.
pub fn first_touch(e: &TouchEvent) -> Option<Point> {
    let t0 = e.touches().item(0)?;
    Some(Point::new(t0.client_x() as f64, t0.client_y() as f64))
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn document_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .is_some_and(|state| state == "loading")
}

/// All `HtmlElement`s matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement> {
    Ok(document.create_element(tag)?.unchecked_into::<HtmlElement>())
}

/// Native `window.confirm` prompt.
pub struct BrowserConfirm(pub Window);

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.0.confirm_with_message(message).unwrap_or(false)
    }
}

pub struct PageReloader(pub Window);

impl Reloader for PageReloader {
    fn reload(&self) {
        if let Err(err) = self.0.location().reload() {
            log::error!("page reload failed: {:?}", err);
        }
    }
}
