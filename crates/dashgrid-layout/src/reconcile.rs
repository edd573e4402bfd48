//! Drag and resize reconciliation.
//!
//! A gesture only touches the data model when it ends. At that point the
//! pixel delta becomes a cell delta, the dragged widget's rectangle is
//! shifted and clamped, and the whole set is re-packed, which may cascade
//! other widgets out of the way.

use dashgrid_core::{DashError, GridOptions, GridRect, WidgetConfig, WidgetSize, MAX_ROW_SPAN};
use glam::DVec2;
use tracing::{debug, warn};

use crate::clamp::clamp_layout_with;
use crate::geometry::GridMetrics;
use crate::pack::pack_widgets_with;

/// Where a dragged widget started.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOrigin {
    pub id: String,
    pub layout: GridRect,
}

/// Result of finishing a drag.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The pointer moved less than half a cell on both axes.
    Click,
    /// The dragged widget no longer exists.
    Stale,
    /// The re-packed widget list.
    Moved(Vec<WidgetConfig>),
}

/// Per-dashboard gesture state: `Idle → Dragging → Idle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging(DragOrigin),
}

impl DragGesture {
    /// Capture the origin of the widget under the pointer.
    ///
    /// Starting a new drag while one is active replaces it.
    pub fn begin(&mut self, id: &str, widgets: &[WidgetConfig]) -> Result<&DragOrigin, DashError> {
        let widget = widgets
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| DashError::UnknownWidget { id: id.to_string() })?;

        *self = DragGesture::Dragging(DragOrigin {
            id: widget.id.clone(),
            layout: widget.layout,
        });
        self.origin().ok_or(DashError::NoActiveDrag)
    }

    /// Drop the in-flight drag without touching the layout.
    pub fn cancel(&mut self) -> Option<DragOrigin> {
        match std::mem::take(self) {
            DragGesture::Dragging(origin) => Some(origin),
            DragGesture::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging(_))
    }

    pub fn origin(&self) -> Option<&DragOrigin> {
        match self {
            DragGesture::Dragging(origin) => Some(origin),
            DragGesture::Idle => None,
        }
    }

    /// End the drag and reconcile it. The gesture returns to idle either way.
    pub fn finish(
        &mut self,
        widgets: &[WidgetConfig],
        delta: DVec2,
        metrics: &GridMetrics,
        max_row_span: u32,
    ) -> Result<DragOutcome, DashError> {
        let origin = self.cancel().ok_or(DashError::NoActiveDrag)?;
        Ok(reconcile_drag_with(widgets, &origin, delta, metrics, max_row_span))
    }
}

/// Round half up, so anything under half a cell maps to zero on either side.
fn round_half_up(value: f64) -> i64 {
    if value.is_finite() {
        (value + 0.5).floor() as i64
    } else {
        0
    }
}

fn cells_for(pixels: f64, pitch: f64) -> i64 {
    if pitch > 0.0 {
        round_half_up(pixels / pitch)
    } else {
        0
    }
}

/// Convert a pixel delta into whole grid cells.
pub fn pixel_delta_to_cells(delta: DVec2, metrics: &GridMetrics) -> (i64, i64) {
    (
        cells_for(delta.x, metrics.column_pitch()),
        cells_for(delta.y, metrics.row_pitch()),
    )
}

fn shift(value: u32, by: i64) -> u32 {
    (value as i64).saturating_add(by).clamp(0, u32::MAX as i64) as u32
}

/// Fold a finished drag into the widget list.
pub fn reconcile_drag(
    widgets: &[WidgetConfig],
    origin: &DragOrigin,
    delta: DVec2,
    metrics: &GridMetrics,
) -> DragOutcome {
    reconcile_drag_with(widgets, origin, delta, metrics, MAX_ROW_SPAN)
}

/// [`reconcile_drag`] with a custom row-span cap.
pub fn reconcile_drag_with(
    widgets: &[WidgetConfig],
    origin: &DragOrigin,
    delta: DVec2,
    metrics: &GridMetrics,
    max_row_span: u32,
) -> DragOutcome {
    let (dx, dy) = pixel_delta_to_cells(delta, metrics);
    if dx == 0 && dy == 0 {
        return DragOutcome::Click;
    }
    if !widgets.iter().any(|w| w.id == origin.id) {
        warn!(id = %origin.id, "drag ended on a widget that no longer exists");
        return DragOutcome::Stale;
    }

    let tentative = origin.layout.at(shift(origin.layout.x, dx), shift(origin.layout.y, dy));
    let target = clamp_layout_with(tentative, metrics.columns, max_row_span);
    debug!(id = %origin.id, dx, dy, x = target.x, y = target.y, "drag reconciled");

    let substituted: Vec<WidgetConfig> = widgets
        .iter()
        .map(|w| if w.id == origin.id { w.with_layout(target) } else { w.clone() })
        .collect();
    DragOutcome::Moved(pack_widgets_with(&substituted, metrics.columns, max_row_span))
}

/// Resize a widget to a size preset, anchored at its current position, and re-pack.
pub fn apply_size_preset(
    widgets: &[WidgetConfig],
    id: &str,
    size: WidgetSize,
    options: &GridOptions,
    columns: u32,
) -> Result<Vec<WidgetConfig>, DashError> {
    if !widgets.iter().any(|w| w.id == id) {
        return Err(DashError::UnknownWidget { id: id.to_string() });
    }

    let preset = options.presets.get(size);
    let substituted: Vec<WidgetConfig> = widgets
        .iter()
        .map(|w| {
            if w.id != id {
                return w.clone();
            }
            let rect = GridRect::new(w.layout.x, w.layout.y, preset.w, preset.h);
            let mut resized = w.with_layout(clamp_layout_with(rect, columns, options.max_row_span));
            resized.size = Some(size);
            resized
        })
        .collect();

    debug!(id, size = size.as_str(), w = preset.w, h = preset.h, "size preset applied");
    Ok(pack_widgets_with(&substituted, columns, options.max_row_span))
}
