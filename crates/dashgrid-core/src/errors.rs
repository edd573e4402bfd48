//! Error types for the dashgrid engine.
//!
//! The layout algorithms themselves are total: clamping sanitises every
//! input, so packing and reconciliation never fail. Errors only arise at the
//! boundary where a host hands the engine ids, options, or JSON.

use thiserror::Error;

/// Top-level error type for the dashgrid engine.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("Unknown widget: {id}")]
    UnknownWidget { id: String },

    #[error("Duplicate widget id: {id}")]
    DuplicateWidgetId { id: String },

    #[error("No drag in progress")]
    NoActiveDrag,

    #[error("Invalid grid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from validating [`GridOptions`](crate::GridOptions).
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("Breakpoints must satisfy 0 < tablet ({tablet}) < desktop ({desktop})")]
    BreakpointOrder { tablet: f64, desktop: f64 },

    #[error("Column count for the {band} band must be at least 1")]
    ZeroColumns { band: &'static str },

    #[error("Row height for the {band} band must be a positive number, got {height}")]
    InvalidRowHeight { band: &'static str, height: f64 },

    #[error("Maximum row span must be at least 1")]
    ZeroRowSpan,

    #[error("Gap must be a non-negative number, got {gap}")]
    InvalidGap { gap: f64 },
}
