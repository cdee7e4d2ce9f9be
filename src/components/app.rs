use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, TouchEvent};
use yew::prelude::*;

use super::{offline_banner::OfflineBanner, pull_indicator::PullIndicator};
use crate::config::MobileConfig;
use crate::dom::{first_touch, scroll_y, PageReloader};
use crate::gesture::{EndOutcome, PullToRefresh, Reloader};
use crate::schedule::{BrowserScheduler, Scheduler};
use crate::state::{ShellAction, ShellState};

#[derive(Properties, PartialEq, Clone)]
pub struct MobileShellProps {
    pub config: MobileConfig,
    /// Pull-to-refresh is only armed on touch/narrow devices.
    pub pull_enabled: bool,
}

#[function_component(MobileShell)]
pub fn mobile_shell(props: &MobileShellProps) -> Html {
    let shell = use_reducer_eq(|| ShellState {
        offline: web_sys::window()
            .map(|w| !w.navigator().on_line())
            .unwrap_or(false),
        ..Default::default()
    });

    // Effect: online/offline banner
    {
        let shell = shell.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let online_cb = {
                let shell = shell.clone();
                Closure::wrap(Box::new(move |_e: Event| {
                    shell.dispatch(ShellAction::SetOnline(true));
                }) as Box<dyn FnMut(_)>)
            };
            let offline_cb = {
                let shell = shell.clone();
                Closure::wrap(Box::new(move |_e: Event| {
                    log::info!("connection lost");
                    shell.dispatch(ShellAction::SetOnline(false));
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                let _ = win
                    .add_event_listener_with_callback("online", online_cb.as_ref().unchecked_ref());
                let _ = win
                    .add_event_listener_with_callback("offline", offline_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "online",
                        online_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "offline",
                        offline_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Effect: pull-to-refresh on the whole document
    {
        let shell = shell.clone();
        let config = props.config.clone();
        use_effect_with(props.pull_enabled, move |&enabled| {
            let mut listeners: Vec<EventListener> = Vec::new();
            let target = web_sys::window().and_then(|w| w.document().map(|d| (w, d)));
            if let (true, Some((window, document))) = (enabled, target) {
                let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::default());
                let reloader: Rc<dyn Reloader> = Rc::new(PageReloader(window.clone()));
                let pull = Rc::new(RefCell::new(PullToRefresh::new(
                    config.commit_threshold_px,
                    config.refresh_delay_ms,
                    scheduler,
                    reloader,
                )));

                let touch_start = {
                    let pull = pull.clone();
                    let window = window.clone();
                    EventListener::new(&document, "touchstart", move |e: &Event| {
                        if let Some(p) = e.dyn_ref::<TouchEvent>().and_then(first_touch) {
                            pull.borrow_mut().touch_start(p, scroll_y(&window));
                        }
                    })
                };
                // touchmove on the document is passive unless asked otherwise
                let touch_move = {
                    let pull = pull.clone();
                    let shell = shell.clone();
                    EventListener::new_with_options(
                        &document,
                        "touchmove",
                        EventListenerOptions::enable_prevent_default(),
                        move |e: &Event| {
                            let Some(p) = e.dyn_ref::<TouchEvent>().and_then(first_touch) else {
                                return;
                            };
                            let mut pull = pull.borrow_mut();
                            if pull.touch_move(p, scroll_y(&window)) {
                                e.prevent_default();
                                shell.dispatch(ShellAction::Indicator(pull.indicator()));
                            }
                        },
                    )
                };
                let on_end = {
                    let pull = pull.clone();
                    let shell = shell.clone();
                    move |_e: &Event| {
                        let mut pull = pull.borrow_mut();
                        if pull.touch_end() != EndOutcome::Idle {
                            shell.dispatch(ShellAction::Indicator(pull.indicator()));
                        }
                    }
                };
                let touch_end = EventListener::new(&document, "touchend", on_end.clone());
                let touch_cancel = EventListener::new(&document, "touchcancel", on_end);
                listeners.extend([touch_start, touch_move, touch_end, touch_cancel]);
                log::debug!("pull-to-refresh armed");
            }
            move || drop(listeners)
        });
    }

    html! {
        <>
            if props.pull_enabled {
                <PullIndicator state={shell.indicator} />
            }
            <OfflineBanner offline={shell.offline} />
        </>
    }
}
