//! Host-owned dashboard state.
//!
//! Every operation here delegates to the pure functions in this crate and
//! swaps in the new snapshot. Persisting the result is left to the caller.

use std::collections::HashSet;

use dashgrid_core::{
    ColumnProfile, DashError, GridOptions, LayoutSnapshot, WidgetConfig, WidgetSize,
};
use glam::DVec2;
use tracing::debug;

use crate::clamp::clamp_layout_with;
use crate::columns::BreakpointTracker;
use crate::geometry::{Bounds, GridMetrics};
use crate::occupancy::OccupancyGrid;
use crate::pack::reflow_with;
use crate::reconcile::{apply_size_preset, DragGesture, DragOutcome};

/// Reject widget lists that reuse an id.
pub fn validate_widgets(widgets: &[WidgetConfig]) -> Result<(), DashError> {
    let mut seen = HashSet::with_capacity(widgets.len());
    for widget in widgets {
        if !seen.insert(widget.id.as_str()) {
            return Err(DashError::DuplicateWidgetId { id: widget.id.clone() });
        }
    }
    Ok(())
}

/// The current widget list plus everything needed to react to viewport
/// changes and gestures.
#[derive(Debug, Clone)]
pub struct Dashboard {
    widgets: Vec<WidgetConfig>,
    options: GridOptions,
    tracker: BreakpointTracker,
    container_width: f64,
    drag: DragGesture,
}

impl Dashboard {
    /// Create an empty dashboard for a viewport. The container is assumed
    /// to span the viewport until [`set_container_width`](Self::set_container_width) says otherwise.
    pub fn new(options: GridOptions, viewport_width: f64) -> Result<Self, DashError> {
        options.validate()?;
        let tracker = BreakpointTracker::new(viewport_width, &options);
        Ok(Self {
            widgets: Vec::new(),
            options,
            tracker,
            container_width: viewport_width.max(0.0),
            drag: DragGesture::Idle,
        })
    }

    /// Replace the widget list, sanitising and packing it for the active profile.
    pub fn load(&mut self, widgets: Vec<WidgetConfig>) -> Result<&[WidgetConfig], DashError> {
        validate_widgets(&widgets)?;
        self.drag.cancel();
        self.widgets = reflow_with(&widgets, self.columns(), self.options.max_row_span);
        debug!(count = self.widgets.len(), columns = self.columns(), "widgets loaded");
        Ok(&self.widgets)
    }

    pub fn widgets(&self) -> &[WidgetConfig] {
        &self.widgets
    }

    pub fn widget(&self, id: &str) -> Option<&WidgetConfig> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn profile(&self) -> ColumnProfile {
        self.tracker.current()
    }

    pub fn columns(&self) -> u32 {
        self.profile().columns
    }

    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::new(self.container_width, &self.profile(), self.options.gap)
    }

    /// React to a viewport resize. Re-flows and returns `true` only when a
    /// breakpoint was crossed.
    ///
    /// Re-flowing clamps into the new band, and the clamped rectangle replaces
    /// the stored one. A widget narrowed by a smaller band keeps its narrower
    /// width when the viewport grows back; hosts that want the authored size
    /// restored should [`load`](Self::load) their saved layout again.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        match self.tracker.observe(width, &self.options) {
            Some(profile) => {
                self.widgets = reflow_with(&self.widgets, profile.columns, self.options.max_row_span);
                true
            }
            None => false,
        }
    }

    /// Width of the element the grid is drawn in, used for pixel conversions.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width.max(0.0);
    }

    pub fn begin_drag(&mut self, id: &str) -> Result<(), DashError> {
        self.drag.begin(id, &self.widgets)?;
        debug!(id, "drag started");
        Ok(())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Finish the drag with the gesture's total pixel delta. Returns `true`
    /// if the layout changed.
    pub fn end_drag(&mut self, delta: DVec2) -> Result<bool, DashError> {
        let metrics = self.metrics();
        match self.drag.finish(&self.widgets, delta, &metrics, self.options.max_row_span)? {
            DragOutcome::Moved(widgets) => {
                let changed = widgets != self.widgets;
                self.widgets = widgets;
                Ok(changed)
            }
            DragOutcome::Click | DragOutcome::Stale => Ok(false),
        }
    }

    /// Apply a size preset to one widget.
    pub fn resize_to_preset(&mut self, id: &str, size: WidgetSize) -> Result<&[WidgetConfig], DashError> {
        self.widgets = apply_size_preset(&self.widgets, id, size, &self.options, self.columns())?;
        Ok(&self.widgets)
    }

    /// Add a widget at the first free slot at or below its requested row.
    ///
    /// A size tag on the incoming widget takes precedence over its `w`/`h`.
    /// Existing widgets never move.
    pub fn add_widget(&mut self, mut widget: WidgetConfig) -> Result<&WidgetConfig, DashError> {
        if self.widget(&widget.id).is_some() {
            return Err(DashError::DuplicateWidgetId { id: widget.id });
        }

        if let Some(size) = widget.size {
            let preset = self.options.presets.get(size);
            widget.layout.w = preset.w;
            widget.layout.h = preset.h;
        }
        let columns = self.columns();
        let want = clamp_layout_with(widget.layout, columns, self.options.max_row_span);
        let grid = OccupancyGrid::from_rects(columns, self.widgets.iter().map(|w| &w.layout));
        widget.layout = grid.find_free_slot(want.w, want.h, want.y, Some(want.x));

        debug!(id = %widget.id, x = widget.layout.x, y = widget.layout.y, "widget added");
        self.widgets.push(widget);
        Ok(&self.widgets[self.widgets.len() - 1])
    }

    /// Remove a widget. Remaining widgets keep their positions.
    pub fn remove_widget(&mut self, id: &str) -> Result<WidgetConfig, DashError> {
        let index = self
            .widgets
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| DashError::UnknownWidget { id: id.to_string() })?;

        if self.drag.origin().is_some_and(|origin| origin.id == id) {
            self.drag.cancel();
        }
        debug!(id, "widget removed");
        Ok(self.widgets.remove(index))
    }

    /// Pixel bounds of a widget in the container.
    pub fn cell_bounds(&self, id: &str) -> Option<Bounds> {
        let metrics = self.metrics();
        self.widget(id).map(|w| metrics.cell_bounds(&w.layout))
    }

    /// Topmost widget under a point in container pixels.
    pub fn widget_at(&self, point: DVec2) -> Option<&WidgetConfig> {
        let metrics = self.metrics();
        self.widgets
            .iter()
            .rev()
            .find(|w| metrics.cell_bounds(&w.layout).contains(point))
    }

    /// Pixel height of the laid-out content.
    pub fn content_height(&self) -> f64 {
        self.metrics().content_height(self.widgets.iter().map(|w| &w.layout))
    }

    /// Persistable copy of the current layout.
    pub fn snapshot(&self, preset_id: Option<String>) -> LayoutSnapshot {
        LayoutSnapshot::new(self.widgets.clone(), preset_id)
    }
}
