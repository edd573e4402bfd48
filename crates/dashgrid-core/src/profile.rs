//! Responsive column profiles.

use serde::{Deserialize, Serialize};

use crate::options::GridOptions;

/// Viewport band selected by width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Narrow viewports (below the tablet threshold)
    Mobile,
    /// Between the tablet and desktop thresholds
    Tablet,
    /// At or above the desktop threshold
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    /// CSS media query matching exactly this band.
    ///
    /// Uses range syntax with half-open bounds so fractional viewport widths
    /// (browser zoom) always fall in exactly one band.
    pub fn media_query(&self, options: &GridOptions) -> String {
        let tablet = options.tablet_min_width;
        let desktop = options.desktop_min_width;
        match self {
            Breakpoint::Mobile => format!("(width < {}px)", tablet),
            Breakpoint::Tablet => format!("({}px <= width < {}px)", tablet, desktop),
            Breakpoint::Desktop => format!("(width >= {}px)", desktop),
        }
    }
}

/// Column count and row height in effect for a viewport band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    pub breakpoint: Breakpoint,
    pub columns: u32,
    /// Height of one grid row in pixels
    pub row_height: f64,
}
