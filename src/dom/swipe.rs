use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, TouchEvent, Window};

use super::style::exit_animation;
use super::{create_html, first_touch, query_all, BrowserConfirm};
use crate::config::MobileConfig;
use crate::error::Result;
use crate::gesture::{DeleteOutcome, RowView, SwipeRow};
use crate::schedule::Scheduler;
use crate::util::translate_left;

pub const ACTION_CLASS: &str = "swipe-actions";
pub const REVEALED_CLASS: &str = "swiped";

/// A tracked list row in the live document.
#[derive(Clone)]
pub struct RowElement {
    el: HtmlElement,
    exit_ms: u32,
}

impl RowView for RowElement {
    fn set_offset(&self, px: f64) {
        let _ = self.el.style().set_property("transform", &translate_left(px));
    }

    fn set_revealed(&self, revealed: bool) {
        let _ = self
            .el
            .class_list()
            .toggle_with_force(REVEALED_CLASS, revealed);
    }

    fn play_exit(&self) {
        let _ = self
            .el
            .style()
            .set_property("animation", &exit_animation(self.exit_ms));
    }

    fn detach(&self) {
        self.el.remove();
    }
}

/// Arms swipe-to-delete on every row matching the configured selector.
pub fn install(
    window: &Window,
    document: &Document,
    config: &MobileConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<usize> {
    let rows = query_all(document, &config.row_selector)?;
    let mut armed = 0;
    for el in rows {
        match attach_row(window, document, el, config, scheduler.clone()) {
            Ok(()) => armed += 1,
            Err(err) => log::warn!("swipe row skipped: {err}"),
        }
    }
    log::debug!("swipe armed on {armed} rows ({})", config.row_selector);
    Ok(armed)
}

fn attach_row(
    window: &Window,
    document: &Document,
    el: HtmlElement,
    config: &MobileConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<()> {
    el.style().set_property("position", "relative")?;
    let action = create_html(document, "div")?;
    action.set_class_name(ACTION_CLASS);
    action.set_text_content(Some("🗑️ Delete"));
    el.append_child(&action)?;

    let row = Rc::new(RefCell::new(SwipeRow::new(
        RowElement {
            el: el.clone(),
            exit_ms: config.delete_exit_ms,
        },
        config.commit_threshold_px,
    )));

    let touch_start_cb = {
        let row = row.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(p) = first_touch(&e) {
                row.borrow_mut().touch_start(p);
            }
        }) as Box<dyn FnMut(_)>)
    };
    el.add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())?;

    let touch_move_cb = {
        let row = row.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let Some(p) = first_touch(&e) else {
                return;
            };
            if row.borrow_mut().touch_move(p) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(_)>)
    };
    el.add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())?;

    let touch_end_cb = {
        let row = row.clone();
        Closure::wrap(Box::new(move |_e: TouchEvent| {
            row.borrow_mut().touch_end();
        }) as Box<dyn FnMut(_)>)
    };
    el.add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())?;
    el.add_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref())?;

    // Taps on the delete target must not start a row gesture, or the tap's
    // touchend would close the row before the click arrives.
    let action_touch_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
        e.stop_propagation();
    }) as Box<dyn FnMut(_)>);
    action.add_event_listener_with_callback("touchstart", action_touch_cb.as_ref().unchecked_ref())?;

    let delete_cb = {
        let row = row.clone();
        let confirm = BrowserConfirm(window.clone());
        let prompt = config.delete_prompt.clone();
        let exit_ms = config.delete_exit_ms;
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            let outcome = row
                .borrow_mut()
                .request_delete(&confirm, &prompt, scheduler.as_ref(), exit_ms);
            if outcome == DeleteOutcome::Declined {
                log::debug!("delete declined");
            }
        }) as Box<dyn FnMut(_)>)
    };
    action.add_event_listener_with_callback("click", delete_cb.as_ref().unchecked_ref())?;

    // Rows live as long as the page does.
    touch_start_cb.forget();
    touch_move_cb.forget();
    touch_end_cb.forget();
    action_touch_cb.forget();
    delete_cb.forget();
    Ok(())
}
