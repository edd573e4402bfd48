//! WebAssembly bindings for the dashgrid layout engine.
//!
//! This crate provides a JavaScript/TypeScript API for dashboards rendered in
//! the browser. The host keeps a [`DashboardEngine`], forwards viewport and
//! gesture events to it, and persists whatever widget list comes back.
//!
//! ## Example
//!
//! ```js
//! import { DashboardEngine } from 'dashgrid';
//!
//! const engine = new DashboardEngine(window.innerWidth);
//! engine.setContainerWidth(grid.clientWidth);
//! let widgets = engine.loadWidgets(savedWidgets);
//!
//! // Re-render whenever the viewport crosses a breakpoint
//! engine.watchBreakpoints((next) => render(next));
//!
//! // Drag gestures
//! engine.beginDrag(id);
//! if (engine.endDrag(dx, dy)) {
//!   render(engine.widgets());
//!   fetch('/api/dashboard/layout', { method: 'POST', body: engine.snapshotJson(presetId) });
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dashgrid_core::{Breakpoint, GridOptions, GridRect, LayoutSnapshot, WidgetConfig, WidgetSize};
use dashgrid_layout::{
    clamp_layout, pack_widgets, reconcile_drag, resolve_columns, Dashboard, DragOutcome,
};
use glam::DVec2;
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod media;
mod types;

pub use types::*;

use media::BreakpointWatcher;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Serialize to plain JS objects (not `Map`s), so widget settings come back
/// as ordinary objects.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn options_from_js(options: JsValue) -> Result<GridOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(GridOptions::default());
    }
    let options: GridOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid grid options: {}", e)))?;
    options
        .validate()
        .map_err(|e| JsError::new(&format!("Invalid grid options: {}", e)))?;
    Ok(options)
}

fn widgets_from_js(widgets: JsValue) -> Result<Vec<WidgetConfig>, JsError> {
    serde_wasm_bindgen::from_value(widgets)
        .map_err(|e| JsError::new(&format!("Invalid widget list: {}", e)))
}

fn parse_size(size: &str) -> Result<WidgetSize, JsError> {
    WidgetSize::parse(size).ok_or_else(|| JsError::new(&format!("Unknown widget size: {}", size)))
}

/// Column count and row height for a viewport width.
#[wasm_bindgen(js_name = resolveColumns)]
pub fn resolve_columns_js(width: f64, options: JsValue) -> Result<JsValue, JsError> {
    let options = options_from_js(options)?;
    to_js(&resolve_columns(width, &options))
}

/// Force a `{x, y, w, h}` rectangle inside a grid.
#[wasm_bindgen(js_name = clampLayout)]
pub fn clamp_layout_js(rect: JsValue, columns: u32) -> Result<JsValue, JsError> {
    let rect: GridRect = serde_wasm_bindgen::from_value(rect)
        .map_err(|e| JsError::new(&format!("Invalid rectangle: {}", e)))?;
    to_js(&clamp_layout(rect, columns))
}

/// Pack a widget list without overlaps.
#[wasm_bindgen(js_name = packWidgets)]
pub fn pack_widgets_js(widgets: JsValue, columns: u32) -> Result<JsValue, JsError> {
    let widgets = widgets_from_js(widgets)?;
    to_js(&pack_widgets(&widgets, columns))
}

/// Reconcile a finished drag. Returns `null` when the gesture was a click
/// or the widget is gone, otherwise the re-packed widget list.
#[wasm_bindgen(js_name = reconcileDrag)]
pub fn reconcile_drag_js(
    widgets: JsValue,
    origin: JsValue,
    dx: f64,
    dy: f64,
    metrics: JsValue,
) -> Result<JsValue, JsError> {
    let widgets = widgets_from_js(widgets)?;
    let origin: DragOriginJs = serde_wasm_bindgen::from_value(origin)
        .map_err(|e| JsError::new(&format!("Invalid drag origin: {}", e)))?;
    let metrics: GridMetricsJs = serde_wasm_bindgen::from_value(metrics)
        .map_err(|e| JsError::new(&format!("Invalid grid metrics: {}", e)))?;

    match reconcile_drag(&widgets, &origin.into_core(), DVec2::new(dx, dy), &metrics.into_core()) {
        DragOutcome::Moved(widgets) => to_js(&widgets),
        DragOutcome::Click | DragOutcome::Stale => Ok(JsValue::NULL),
    }
}

/// Media queries for each band, for hosts wiring their own listeners.
#[wasm_bindgen(js_name = mediaQueries)]
pub fn media_queries(options: JsValue) -> Result<JsValue, JsError> {
    let options = options_from_js(options)?;
    let queries: Vec<MediaQueryJs> = Breakpoint::ALL
        .into_iter()
        .map(|breakpoint| MediaQueryJs {
            breakpoint,
            query: breakpoint.media_query(&options),
        })
        .collect();
    to_js(&queries)
}

/// A dashboard's live layout state for JavaScript.
#[wasm_bindgen]
pub struct DashboardEngine {
    state: Rc<RefCell<Dashboard>>,
    watcher: Option<BreakpointWatcher>,
}

#[wasm_bindgen]
impl DashboardEngine {
    /// Create an engine for the current viewport. `options` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f64, options: JsValue) -> Result<DashboardEngine, JsError> {
        let options = options_from_js(options)?;
        let dashboard = Dashboard::new(options, viewport_width)?;
        Ok(Self {
            state: Rc::new(RefCell::new(dashboard)),
            watcher: None,
        })
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Replace the widget list. Returns the sanitised, packed list.
    #[wasm_bindgen(js_name = loadWidgets)]
    pub fn load_widgets(&mut self, widgets: JsValue) -> Result<JsValue, JsError> {
        let widgets = widgets_from_js(widgets)?;
        let mut dashboard = self.state.borrow_mut();
        to_js(dashboard.load(widgets)?)
    }

    /// Replace the widget list from a persisted snapshot JSON string.
    #[wasm_bindgen(js_name = loadSnapshot)]
    pub fn load_snapshot(&mut self, json: &str) -> Result<JsValue, JsError> {
        let snapshot = LayoutSnapshot::from_json(json)?;
        let mut dashboard = self.state.borrow_mut();
        to_js(dashboard.load(snapshot.widgets)?)
    }

    /// Current widget list.
    #[wasm_bindgen]
    pub fn widgets(&self) -> Result<JsValue, JsError> {
        to_js(self.state.borrow().widgets())
    }

    /// Active column profile.
    #[wasm_bindgen]
    pub fn profile(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.borrow().profile())
    }

    #[wasm_bindgen]
    pub fn columns(&self) -> u32 {
        self.state.borrow().columns()
    }

    /// Feed a viewport width. Returns `true` if the layout was re-flowed.
    #[wasm_bindgen(js_name = setViewportWidth)]
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        self.state.borrow_mut().set_viewport_width(width)
    }

    #[wasm_bindgen(js_name = setContainerWidth)]
    pub fn set_container_width(&mut self, width: f64) {
        self.state.borrow_mut().set_container_width(width);
    }

    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, id: &str) -> Result<(), JsError> {
        self.state.borrow_mut().begin_drag(id)?;
        Ok(())
    }

    /// Finish the drag with the total pixel delta. Returns `true` if the layout changed.
    #[wasm_bindgen(js_name = endDrag)]
    pub fn end_drag(&mut self, dx: f64, dy: f64) -> Result<bool, JsError> {
        Ok(self.state.borrow_mut().end_drag(DVec2::new(dx, dy))?)
    }

    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self) {
        self.state.borrow_mut().cancel_drag();
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().is_dragging()
    }

    /// Resize a widget to `"small"`, `"medium"`, or `"large"`.
    #[wasm_bindgen(js_name = applySizePreset)]
    pub fn apply_size_preset(&mut self, id: &str, size: &str) -> Result<JsValue, JsError> {
        let size = parse_size(size)?;
        let mut dashboard = self.state.borrow_mut();
        to_js(dashboard.resize_to_preset(id, size)?)
    }

    /// Add a widget at the first free slot. Returns the placed widget.
    #[wasm_bindgen(js_name = addWidget)]
    pub fn add_widget(&mut self, widget: JsValue) -> Result<JsValue, JsError> {
        let widget: WidgetConfig = serde_wasm_bindgen::from_value(widget)
            .map_err(|e| JsError::new(&format!("Invalid widget: {}", e)))?;
        let mut dashboard = self.state.borrow_mut();
        to_js(dashboard.add_widget(widget)?)
    }

    /// Remove a widget. Returns the removed widget.
    #[wasm_bindgen(js_name = removeWidget)]
    pub fn remove_widget(&mut self, id: &str) -> Result<JsValue, JsError> {
        let removed = self.state.borrow_mut().remove_widget(id)?;
        to_js(&removed)
    }

    /// Pixel bounds of a widget, or `null` if it does not exist.
    #[wasm_bindgen(js_name = cellBounds)]
    pub fn cell_bounds(&self, id: &str) -> Result<JsValue, JsError> {
        match self.state.borrow().cell_bounds(id) {
            Some(bounds) => to_js(&BoundsJs::from(bounds)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Widget under a point in container pixels, or `null`.
    #[wasm_bindgen(js_name = widgetAt)]
    pub fn widget_at(&self, x: f64, y: f64) -> Result<JsValue, JsError> {
        match self.state.borrow().widget_at(DVec2::new(x, y)) {
            Some(widget) => to_js(widget),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = contentHeight)]
    pub fn content_height(&self) -> f64 {
        self.state.borrow().content_height()
    }

    /// Persistable snapshot object.
    #[wasm_bindgen]
    pub fn snapshot(&self, preset_id: Option<String>) -> Result<JsValue, JsError> {
        to_js(&self.state.borrow().snapshot(preset_id))
    }

    /// Persistable snapshot as a JSON string, ready to POST.
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self, preset_id: Option<String>) -> Result<String, JsError> {
        Ok(self.state.borrow().snapshot(preset_id).to_json()?)
    }

    /// Listen for breakpoint crossings via media queries. `onChange` receives
    /// the re-flowed widget list. Replaces any previous listener.
    #[wasm_bindgen(js_name = watchBreakpoints)]
    pub fn watch_breakpoints(&mut self, on_change: js_sys::Function) -> Result<(), JsValue> {
        self.watcher = None;
        self.watcher = Some(BreakpointWatcher::attach(Rc::clone(&self.state), on_change)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = unwatchBreakpoints)]
    pub fn unwatch_breakpoints(&mut self) {
        self.watcher = None;
    }
}
