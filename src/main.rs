use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

mod components;
mod config;
mod dom;
mod error;
mod gesture;
mod logging;
mod schedule;
mod state;
mod util;

use components::{MobileShell, MobileShellProps};
use config::MobileConfig;
use error::{EnhanceError, Result};
use schedule::{BrowserScheduler, Scheduler};

fn enhance(window: &Window, document: &Document) {
    let config = MobileConfig::load(window, document);
    log::set_max_level(config.level_filter());

    if let Err(err) = dom::style::install_keyframes(document) {
        log::warn!("keyframes not installed: {err}");
    }
    match dom::nav::install(window, document, config.mobile_breakpoint_px) {
        Ok(true) => log::debug!("nav toggle installed"),
        Ok(false) => log::debug!("no nav on this page"),
        Err(err) => log::warn!("nav toggle not installed: {err}"),
    }

    let mobile = dom::device::is_mobile_device(window, config.mobile_breakpoint_px);
    if mobile {
        if let Err(err) = dom::stepper::install(document) {
            log::warn!("quantity steppers not installed: {err}");
        }
        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::default());
        if let Err(err) = dom::swipe::install(window, document, &config, scheduler) {
            log::warn!("swipe rows not installed: {err}");
        }
    }

    if let Err(err) = mount_shell(document, config, mobile) {
        log::error!("shell not mounted: {err}");
    }
}

/// Pull indicator and offline banner live in a yew root appended to `<body>`.
fn mount_shell(document: &Document, config: MobileConfig, pull_enabled: bool) -> Result<()> {
    let body = document.body().ok_or(EnhanceError::MissingElement("body"))?;
    let host = document.create_element("div")?;
    host.set_class_name("mobile-shell");
    body.append_child(&host)?;
    yew::Renderer::<MobileShell>::with_root_and_props(
        host,
        MobileShellProps {
            config,
            pull_enabled,
        },
    )
    .render();
    Ok(())
}

fn main() {
    logging::init(log::LevelFilter::Info);
    let Some(window) = web_sys::window() else {
        log::error!("{}", EnhanceError::MissingWindow);
        return;
    };
    let Some(document) = window.document() else {
        log::error!("{}", EnhanceError::MissingDocument);
        return;
    };
    if !dom::document_loading(&document) {
        enhance(&window, &document);
        return;
    }
    let ready_cb = {
        let window = window.clone();
        let document = document.clone();
        Closure::once(move || enhance(&window, &document))
    };
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", ready_cb.as_ref().unchecked_ref())
    {
        log::error!("{}", EnhanceError::from(err));
        return;
    }
    ready_cb.forget();
}
