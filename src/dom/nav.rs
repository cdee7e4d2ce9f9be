use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Node, Window};

use super::{create_html, query_all, viewport_width};
use crate::error::Result;
use crate::state::nav::{toggle_visible, NavMenu};

pub const OPEN_CLASS: &str = "active";

struct NavElements {
    container: Element,
    menu: Element,
    toggle: HtmlElement,
}

impl NavElements {
    fn render(&self, nav: NavMenu) {
        let _ = self.menu.class_list().toggle_with_force(OPEN_CLASS, nav.open);
        self.toggle.set_text_content(Some(nav.glyph()));
        let _ = self.toggle.set_attribute("aria-expanded", nav.aria_expanded());
    }

    fn fit_to(&self, nav: &Cell<NavMenu>, width: f64, breakpoint_px: f64) {
        let visible = toggle_visible(width, breakpoint_px);
        let _ = self
            .toggle
            .style()
            .set_property("display", if visible { "block" } else { "none" });
        if !visible {
            close(self, nav);
        }
    }
}

fn close(els: &NavElements, nav: &Cell<NavMenu>) {
    let mut state = nav.get();
    if state.close() {
        nav.set(state);
        els.render(state);
    }
}

/// Inserts the menu toggle before `.nav-menu`. Returns false when the page has no nav.
pub fn install(window: &Window, document: &Document, breakpoint_px: f64) -> Result<bool> {
    let (Some(container), Some(menu)) = (
        document.query_selector(".nav-container")?,
        document.query_selector(".nav-menu")?,
    ) else {
        return Ok(false);
    };
    let toggle = create_html(document, "button")?;
    toggle.set_class_name("nav-toggle");
    toggle.set_attribute("aria-label", "Toggle navigation menu")?;
    menu.before_with_node_1(&toggle)?;

    let els = Rc::new(NavElements {
        container,
        menu,
        toggle,
    });
    let nav = Rc::new(Cell::new(NavMenu::default()));
    els.render(nav.get());
    els.fit_to(&nav, viewport_width(window), breakpoint_px);

    let toggle_cb = {
        let els = els.clone();
        let nav = nav.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            let mut state = nav.get();
            state.toggle();
            nav.set(state);
            els.render(state);
        }) as Box<dyn FnMut(_)>)
    };
    els.toggle
        .add_event_listener_with_callback("click", toggle_cb.as_ref().unchecked_ref())?;

    let outside_cb = {
        let els = els.clone();
        let nav = nav.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !els.container.contains(target.as_ref()) {
                close(&els, &nav);
            }
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("click", outside_cb.as_ref().unchecked_ref())?;

    let link_cb = {
        let els = els.clone();
        let nav = nav.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            if toggle_visible(viewport_width(&window), breakpoint_px) {
                close(&els, &nav);
            }
        }) as Box<dyn FnMut(_)>)
    };
    for link in query_all(document, ".nav-menu .nav-link")? {
        link.add_event_listener_with_callback("click", link_cb.as_ref().unchecked_ref())?;
    }

    let resize_cb = {
        let window_r = window.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            els.fit_to(&nav, viewport_width(&window_r), breakpoint_px);
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    toggle_cb.forget();
    outside_cb.forget();
    link_cb.forget();
    resize_cb.forget();
    Ok(true)
}
