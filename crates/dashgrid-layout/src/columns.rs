//! Column resolution from viewport width.

use dashgrid_core::{Breakpoint, ColumnProfile, GridOptions};
use tracing::debug;

/// Viewport band for a width in pixels. NaN falls into the mobile band.
pub fn breakpoint_for(width: f64, options: &GridOptions) -> Breakpoint {
    if width >= options.desktop_min_width {
        Breakpoint::Desktop
    } else if width >= options.tablet_min_width {
        Breakpoint::Tablet
    } else {
        Breakpoint::Mobile
    }
}

/// Column count and row height for a viewport width.
pub fn resolve_columns(width: f64, options: &GridOptions) -> ColumnProfile {
    options.profile(breakpoint_for(width, options))
}

/// Tracks the active profile and reports only band crossings.
///
/// Hosts forward media-query change events (or raw resize widths) to
/// [`observe`](Self::observe); layouts only need re-flowing when it
/// returns a new profile.
#[derive(Debug, Clone)]
pub struct BreakpointTracker {
    current: ColumnProfile,
}

impl BreakpointTracker {
    pub fn new(width: f64, options: &GridOptions) -> Self {
        Self {
            current: resolve_columns(width, options),
        }
    }

    pub fn current(&self) -> ColumnProfile {
        self.current
    }

    /// Feed a new viewport width. Returns the new profile if a breakpoint was crossed.
    pub fn observe(&mut self, width: f64, options: &GridOptions) -> Option<ColumnProfile> {
        let next = resolve_columns(width, options);
        if next == self.current {
            return None;
        }
        debug!(
            from = self.current.breakpoint.as_str(),
            to = next.breakpoint.as_str(),
            columns = next.columns,
            "breakpoint crossed"
        );
        self.current = next;
        Some(next)
    }
}
