//! Engine options.
//!
//! Every constant the layout engine depends on lives here so hosts can
//! override them from JSON. Missing fields fall back to [`Default`].

use serde::{Deserialize, Serialize};

use crate::errors::OptionsError;
use crate::profile::{Breakpoint, ColumnProfile};
use crate::types::{WidgetSize, MAX_ROW_SPAN};

/// Column count and row height for one viewport band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandOptions {
    pub columns: u32,
    pub row_height: f64,
}

impl BandOptions {
    pub const fn new(columns: u32, row_height: f64) -> Self {
        Self { columns, row_height }
    }
}

/// Width and height a size preset expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSize {
    pub w: u32,
    pub h: u32,
}

impl PresetSize {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Preset dimensions for each [`WidgetSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizePresets {
    pub small: PresetSize,
    pub medium: PresetSize,
    pub large: PresetSize,
}

impl Default for SizePresets {
    fn default() -> Self {
        Self {
            small: PresetSize::new(4, 2),
            medium: PresetSize::new(6, 3),
            large: PresetSize::new(12, 4),
        }
    }
}

impl SizePresets {
    pub fn get(&self, size: WidgetSize) -> PresetSize {
        match size {
            WidgetSize::Small => self.small,
            WidgetSize::Medium => self.medium,
            WidgetSize::Large => self.large,
        }
    }
}

/// Layout engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    /// Viewports at least this wide use the tablet band
    pub tablet_min_width: f64,
    /// Viewports at least this wide use the desktop band
    pub desktop_min_width: f64,
    pub mobile: BandOptions,
    pub tablet: BandOptions,
    pub desktop: BandOptions,
    /// Tallest a widget may be, in rows
    pub max_row_span: u32,
    /// Pixel gap between adjacent cells
    pub gap: f64,
    pub presets: SizePresets,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            tablet_min_width: 768.0,
            desktop_min_width: 1280.0,
            mobile: BandOptions::new(4, 120.0),
            tablet: BandOptions::new(8, 108.0),
            desktop: BandOptions::new(12, 96.0),
            max_row_span: MAX_ROW_SPAN,
            gap: 16.0,
            presets: SizePresets::default(),
        }
    }
}

impl GridOptions {
    /// Band settings for a breakpoint.
    pub fn band(&self, breakpoint: Breakpoint) -> BandOptions {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }

    /// Column profile for a breakpoint.
    pub fn profile(&self, breakpoint: Breakpoint) -> ColumnProfile {
        let band = self.band(breakpoint);
        ColumnProfile {
            breakpoint,
            columns: band.columns,
            row_height: band.row_height,
        }
    }

    /// Check that the options describe a usable grid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let tablet = self.tablet_min_width;
        let desktop = self.desktop_min_width;
        if !(tablet.is_finite() && desktop.is_finite() && 0.0 < tablet && tablet < desktop) {
            return Err(OptionsError::BreakpointOrder { tablet, desktop });
        }

        for breakpoint in Breakpoint::ALL {
            let band = self.band(breakpoint);
            if band.columns == 0 {
                return Err(OptionsError::ZeroColumns { band: breakpoint.as_str() });
            }
            if !(band.row_height.is_finite() && band.row_height > 0.0) {
                return Err(OptionsError::InvalidRowHeight {
                    band: breakpoint.as_str(),
                    height: band.row_height,
                });
            }
        }

        if self.max_row_span == 0 {
            return Err(OptionsError::ZeroRowSpan);
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(OptionsError::InvalidGap { gap: self.gap });
        }
        Ok(())
    }
}
