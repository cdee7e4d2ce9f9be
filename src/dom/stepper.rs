use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, MouseEvent, Node};

use super::create_html;
use crate::error::{EnhanceError, Result};
use crate::state::stepper::{current_value, Stepper};
use crate::util::format_quantity;

const BUTTON_CLASS: &str = "btn btn-outline btn-small";
const BUTTON_CSS: &str = "min-width: 40px; height: 40px; padding: 0;";

#[derive(Clone, Copy)]
enum Direction {
    Down,
    Up,
}

/// Wraps every number input with `−`/`+` buttons. Returns how many were wrapped.
pub fn install(document: &Document) -> Result<usize> {
    let inputs = document.query_selector_all("input[type=\"number\"]")?;
    let mut wrapped = 0;
    for i in 0..inputs.length() {
        let Some(input) = inputs
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        match wrap_input(document, input) {
            Ok(()) => wrapped += 1,
            Err(err) => log::warn!("quantity input skipped: {err}"),
        }
    }
    log::debug!("wrapped {wrapped} quantity inputs");
    Ok(wrapped)
}

fn wrap_input(document: &Document, input: HtmlInputElement) -> Result<()> {
    let parent = input
        .parent_node()
        .ok_or(EnhanceError::MissingElement("input parent"))?;
    let wrapper = create_html(document, "div")?;
    wrapper.set_class_name("quantity-wrapper");
    wrapper
        .style()
        .set_css_text("display: flex; align-items: center; gap: 0.5rem;");

    let decrease = step_button(document, "−")?;
    let increase = step_button(document, "+")?;

    let anchor: &Node = input.as_ref();
    parent.insert_before(&wrapper, Some(anchor))?;
    wrapper.append_child(&decrease)?;
    wrapper.append_child(&input)?;
    wrapper.append_child(&increase)?;

    input
        .style()
        .set_css_text("text-align: center; -moz-appearance: textfield;");
    input.set_read_only(true);

    let input = Rc::new(input);
    listen(&decrease, input.clone(), Direction::Down)?;
    listen(&increase, input, Direction::Up)?;
    Ok(())
}

fn step_button(document: &Document, label: &str) -> Result<HtmlElement> {
    let btn = create_html(document, "button")?;
    btn.set_attribute("type", "button")?;
    btn.set_class_name(BUTTON_CLASS);
    btn.set_text_content(Some(label));
    btn.style().set_css_text(BUTTON_CSS);
    Ok(btn)
}

fn listen(button: &HtmlElement, input: Rc<HtmlInputElement>, dir: Direction) -> Result<()> {
    let cb = Closure::wrap(Box::new(move |_e: MouseEvent| {
        let stepper = Stepper::from_attrs(&input.step(), &input.min(), &input.max());
        let value = current_value(&input.value());
        let next = match dir {
            Direction::Down => stepper.decrement(value),
            Direction::Up => stepper.increment(value),
        };
        if let Some(next) = next {
            input.set_value(&format_quantity(next));
            if let Ok(ev) = Event::new("input") {
                let _ = input.dispatch_event(&ev);
            }
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
