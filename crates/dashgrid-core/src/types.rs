//! Widget descriptors and grid rectangles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::DashError;

/// Largest number of rows a single widget may span.
pub const MAX_ROW_SPAN: u32 = 8;

/// Opaque per-widget settings owned by the widget's renderer.
pub type Settings = IndexMap<String, serde_json::Value>;

/// A rectangle on the layout grid, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawGridRect")]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// First column past the right edge (x + w).
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// First row past the bottom edge (y + h).
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Same size, new origin.
    pub fn at(&self, x: u32, y: u32) -> Self {
        Self { x, y, ..*self }
    }

    /// Last row covered, or `None` if the rectangle is empty or runs past
    /// the last addressable row.
    pub fn last_row(&self) -> Option<u32> {
        self.h.checked_sub(1).and_then(|span| self.y.checked_add(span))
    }

    /// Check whether two rectangles share at least one cell.
    pub fn overlaps(&self, other: &GridRect) -> bool {
        let (ax, ay, aw, ah) = (self.x as u64, self.y as u64, self.w as u64, self.h as u64);
        let (bx, by, bw, bh) = (other.x as u64, other.y as u64, other.w as u64, other.h as u64);
        ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
    }

    /// Iterate over every `(row, col)` cell covered by the rectangle.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.h)
            .map_while(move |dy| self.y.checked_add(dy))
            .flat_map(move |row| {
                (0..self.w)
                    .map_while(move |dx| self.x.checked_add(dx))
                    .map(move |col| (row, col))
            })
    }
}

/// Wire form of a rectangle. Hosts send plain JS numbers, which may be
/// negative, fractional, or missing entirely.
#[derive(Deserialize)]
struct RawGridRect {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default = "one")]
    w: f64,
    #[serde(default = "one")]
    h: f64,
}

fn one() -> f64 {
    1.0
}

fn to_cells(value: f64, min: u32) -> u32 {
    if !value.is_finite() {
        return min;
    }
    value.round().clamp(min as f64, u32::MAX as f64) as u32
}

impl From<RawGridRect> for GridRect {
    fn from(raw: RawGridRect) -> Self {
        Self {
            x: to_cells(raw.x, 0),
            y: to_cells(raw.y, 0),
            w: to_cells(raw.w, 1),
            h: to_cells(raw.h, 1),
        }
    }
}

/// Semantic size tag a user can pick for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
}

impl WidgetSize {
    pub const ALL: [WidgetSize; 3] = [WidgetSize::Small, WidgetSize::Medium, WidgetSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        }
    }

    /// Parse a size tag as the host spells it.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str().eq_ignore_ascii_case(tag))
    }
}

/// A dashboard tile: identity, title, grid rectangle, and renderer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(default)]
    pub title: String,
    pub layout: GridRect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<WidgetSize>,
    #[serde(default)]
    pub settings: Settings,
}

impl WidgetConfig {
    /// Create a widget with empty title and settings.
    pub fn new(id: impl Into<String>, widget_type: impl Into<String>, layout: GridRect) -> Self {
        Self {
            id: id.into(),
            widget_type: widget_type.into(),
            title: String::new(),
            layout,
            size: None,
            settings: Settings::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, size: WidgetSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    /// Copy of this widget with a different rectangle.
    pub fn with_layout(&self, layout: GridRect) -> Self {
        Self { layout, ..self.clone() }
    }
}

/// The payload a host persists after a layout change: the widget list plus
/// the named preset it was derived from, if any.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub widgets: Vec<WidgetConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
}

impl LayoutSnapshot {
    pub fn new(widgets: Vec<WidgetConfig>, preset_id: Option<String>) -> Self {
        Self { widgets, preset_id }
    }

    pub fn to_json(&self) -> Result<String, DashError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, DashError> {
        Ok(serde_json::from_str(s)?)
    }
}
