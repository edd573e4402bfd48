//! Layout computation for dashgrid dashboards.
//!
//! This crate turns a list of widget descriptors plus a live viewport width
//! into a concrete, non-overlapping placement, and folds drag and resize
//! gestures back into that placement.
//!
//! # Architecture
//!
//! 1. **Column resolution**: viewport width selects a column count and row height
//! 2. **Clamping**: every rectangle is forced inside the active grid
//! 3. **Packing**: deterministic first-fit placement over an occupancy grid
//! 4. **Reconciliation**: pixel drag deltas and size presets become new rectangles,
//!    followed by a full re-pack
//!
//! All of the above are pure functions over snapshots. [`Dashboard`] is the
//! mutable cell a host keeps around and feeds events into.
//!
//! # Example
//!
//! ```ignore
//! use dashgrid_layout::{resolve_columns, pack_widgets};
//!
//! let profile = resolve_columns(viewport_width, &GridOptions::default());
//! let placed = pack_widgets(&widgets, profile.columns);
//! ```

mod clamp;
mod columns;
mod dashboard;
mod geometry;
mod occupancy;
mod pack;
mod reconcile;

pub use clamp::{clamp_layout, clamp_layout_with};
pub use columns::{breakpoint_for, resolve_columns, BreakpointTracker};
pub use dashboard::{validate_widgets, Dashboard};
pub use geometry::{Bounds, GridMetrics};
pub use occupancy::OccupancyGrid;
pub use pack::{pack_widgets, pack_widgets_with, reflow, reflow_with};
pub use reconcile::{
    apply_size_preset, pixel_delta_to_cells, reconcile_drag, reconcile_drag_with, DragGesture,
    DragOrigin, DragOutcome,
};
