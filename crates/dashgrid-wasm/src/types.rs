//! JavaScript-facing shapes that have no direct counterpart in the core types.

use dashgrid_core::{Breakpoint, GridRect};
use dashgrid_layout::{Bounds, DragOrigin, GridMetrics};
use serde::{Deserialize, Serialize};

/// Pixel bounds for JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsJs {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Bounds> for BoundsJs {
    fn from(bounds: Bounds) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        }
    }
}

/// Grid metrics from JavaScript, for the stateless `reconcileDrag` export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMetricsJs {
    pub container_width: f64,
    pub columns: u32,
    pub row_height: f64,
    #[serde(default)]
    pub gap: f64,
}

impl GridMetricsJs {
    pub fn into_core(self) -> GridMetrics {
        GridMetrics {
            container_width: self.container_width,
            columns: self.columns,
            row_height: self.row_height,
            gap: self.gap,
        }
    }
}

/// Drag origin captured by the host at gesture start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragOriginJs {
    pub id: String,
    pub layout: GridRect,
}

impl DragOriginJs {
    pub fn into_core(self) -> DragOrigin {
        DragOrigin {
            id: self.id,
            layout: self.layout,
        }
    }
}

/// A band and the media query that selects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaQueryJs {
    pub breakpoint: Breakpoint,
    pub query: String,
}
