//! Pixel geometry for the grid.
//!
//! Maps grid rectangles to pixel bounds and back, given the container width
//! and the active column profile.

use dashgrid_core::{ColumnProfile, GridRect};
use glam::DVec2;

/// Axis-aligned bounding box in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    /// Position relative to the grid container
    pub x: f64,
    pub y: f64,
    /// Size of the box
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: DVec2, size: DVec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> DVec2 {
        self.position() + self.size() / 2.0
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Pixel dimensions of the grid currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Width of the grid container in pixels
    pub container_width: f64,
    pub columns: u32,
    /// Height of one row in pixels
    pub row_height: f64,
    /// Gap between adjacent cells in pixels
    pub gap: f64,
}

impl GridMetrics {
    pub fn new(container_width: f64, profile: &ColumnProfile, gap: f64) -> Self {
        Self {
            container_width,
            columns: profile.columns,
            row_height: profile.row_height,
            gap,
        }
    }

    fn column_count(&self) -> f64 {
        self.columns.max(1) as f64
    }

    /// Width of a single column, excluding gaps.
    pub fn column_width(&self) -> f64 {
        let cols = self.column_count();
        ((self.container_width - self.gap * (cols - 1.0)) / cols).max(0.0)
    }

    /// Horizontal distance between the left edges of adjacent columns.
    pub fn column_pitch(&self) -> f64 {
        self.column_width() + self.gap
    }

    /// Vertical distance between the top edges of adjacent rows.
    pub fn row_pitch(&self) -> f64 {
        self.row_height + self.gap
    }

    /// Pixel bounds covered by a grid rectangle.
    pub fn cell_bounds(&self, rect: &GridRect) -> Bounds {
        let w = rect.w.max(1) as f64;
        let h = rect.h.max(1) as f64;
        Bounds::new(
            rect.x as f64 * self.column_pitch(),
            rect.y as f64 * self.row_pitch(),
            w * self.column_width() + (w - 1.0) * self.gap,
            h * self.row_height + (h - 1.0) * self.gap,
        )
    }

    /// Total pixel height needed to show every rectangle.
    pub fn content_height<'a>(&self, rects: impl IntoIterator<Item = &'a GridRect>) -> f64 {
        rects
            .into_iter()
            .map(|rect| self.cell_bounds(rect).bottom())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_core::Breakpoint;

    fn desktop() -> ColumnProfile {
        ColumnProfile {
            breakpoint: Breakpoint::Desktop,
            columns: 12,
            row_height: 96.0,
        }
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert!(bounds.contains(DVec2::new(50.0, 40.0)));
        assert!(!bounds.contains(DVec2::new(5.0, 40.0)));
        assert!(!bounds.contains(DVec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_column_pitch() {
        // 12 columns of 84px plus 11 gaps of 16px
        let metrics = GridMetrics::new(1184.0, &desktop(), 16.0);
        assert!((metrics.column_width() - 84.0).abs() < 0.001);
        assert!((metrics.column_pitch() - 100.0).abs() < 0.001);
        assert!((metrics.row_pitch() - 112.0).abs() < 0.001);
    }

    #[test]
    fn test_cell_bounds() {
        let metrics = GridMetrics::new(1184.0, &desktop(), 16.0);
        let bounds = metrics.cell_bounds(&GridRect::new(2, 1, 3, 2));
        assert!((bounds.x - 200.0).abs() < 0.001);
        assert!((bounds.y - 112.0).abs() < 0.001);
        assert!((bounds.width - 284.0).abs() < 0.001);
        assert!((bounds.height - 208.0).abs() < 0.001);
    }

    #[test]
    fn test_full_width_rect_fills_container() {
        let metrics = GridMetrics::new(1184.0, &desktop(), 16.0);
        let bounds = metrics.cell_bounds(&GridRect::new(0, 0, 12, 1));
        assert!((bounds.right() - 1184.0).abs() < 0.001);
    }

    #[test]
    fn test_narrow_container_never_negative() {
        let metrics = GridMetrics::new(50.0, &desktop(), 16.0);
        assert_eq!(metrics.column_width(), 0.0);
        assert!((metrics.column_pitch() - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_content_height() {
        let metrics = GridMetrics::new(1184.0, &desktop(), 0.0);
        let rects = [GridRect::new(0, 0, 4, 2), GridRect::new(0, 2, 4, 3)];
        assert!((metrics.content_height(&rects) - 480.0).abs() < 0.001);
    }
}
