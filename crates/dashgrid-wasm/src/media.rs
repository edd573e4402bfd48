//! Media-query driven breakpoint watching.
//!
//! One `change` listener per band. When the viewport enters a band the
//! dashboard is re-flowed and the host callback receives the new widgets.

use std::cell::RefCell;
use std::rc::Rc;

use dashgrid_core::Breakpoint;
use dashgrid_layout::Dashboard;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::to_js;

type ChangeListener = Closure<dyn FnMut(MediaQueryListEvent)>;

pub(crate) struct BreakpointWatcher {
    listeners: Vec<(MediaQueryList, ChangeListener)>,
}

impl BreakpointWatcher {
    pub(crate) fn attach(
        state: Rc<RefCell<Dashboard>>,
        on_change: js_sys::Function,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
        let options = state.borrow().options().clone();

        let mut listeners = Vec::with_capacity(Breakpoint::ALL.len());
        for breakpoint in Breakpoint::ALL {
            let query = breakpoint.media_query(&options);
            let Some(list) = window.match_media(&query)? else {
                warn!(%query, "media query not supported");
                continue;
            };

            let state = Rc::clone(&state);
            let on_change = on_change.clone();
            let window = window.clone();
            let listener = ChangeListener::new(move |event: MediaQueryListEvent| {
                // Leaving a band fires too; only the band being entered reflows.
                if !event.matches() {
                    return;
                }
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|w| w.as_f64())
                    .unwrap_or(0.0);

                let widgets = {
                    let Ok(mut dashboard) = state.try_borrow_mut() else {
                        warn!("dashboard busy, breakpoint change dropped");
                        return;
                    };
                    if !dashboard.set_viewport_width(width) {
                        return;
                    }
                    debug!(breakpoint = breakpoint.as_str(), width, "reflowed for media query");
                    to_js(dashboard.widgets())
                };

                match widgets {
                    Ok(widgets) => {
                        if let Err(err) = on_change.call1(&JsValue::NULL, &widgets) {
                            warn!(?err, "breakpoint callback threw");
                        }
                    }
                    Err(_) => warn!("failed to serialize widgets after reflow"),
                }
            });

            list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())?;
            listeners.push((list, listener));
        }

        Ok(Self { listeners })
    }
}

impl Drop for BreakpointWatcher {
    fn drop(&mut self) {
        for (list, listener) in &self.listeners {
            let _ = list.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
        }
    }
}
