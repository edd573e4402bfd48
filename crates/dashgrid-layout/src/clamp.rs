//! Rectangle clamping.

use dashgrid_core::{GridRect, MAX_ROW_SPAN};

/// Force a rectangle inside a grid of `columns` columns.
///
/// Heights are capped to [`MAX_ROW_SPAN`]. See [`clamp_layout_with`].
pub fn clamp_layout(rect: GridRect, columns: u32) -> GridRect {
    clamp_layout_with(rect, columns, MAX_ROW_SPAN)
}

/// Force a rectangle inside the grid with a custom row-span cap.
///
/// Total: a column count or span cap of 0 is treated as 1, so the result
/// always has `w >= 1`, `h >= 1`, and `x + w <= columns`. `y` is only
/// lowered when the footprint would run past the last addressable row.
pub fn clamp_layout_with(rect: GridRect, columns: u32, max_row_span: u32) -> GridRect {
    let columns = columns.max(1);
    let h = rect.h.clamp(1, max_row_span.max(1));
    let w = rect.w.clamp(1, columns);
    let x = rect.x.min(columns - w);
    let y = rect.y.min(u32::MAX - (h - 1));
    GridRect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_bounds_is_noop() {
        let rect = GridRect::new(2, 5, 4, 3);
        assert_eq!(clamp_layout(rect, 12), rect);
    }

    #[test]
    fn test_clamp_width_to_columns() {
        assert_eq!(clamp_layout(GridRect::new(0, 0, 6, 2), 4), GridRect::new(0, 0, 4, 2));
        assert_eq!(clamp_layout(GridRect::new(3, 0, 6, 2), 4), GridRect::new(0, 0, 4, 2));
    }

    #[test]
    fn test_clamp_shifts_x_left() {
        assert_eq!(clamp_layout(GridRect::new(10, 1, 4, 2), 12), GridRect::new(8, 1, 4, 2));
    }

    #[test]
    fn test_clamp_height() {
        assert_eq!(clamp_layout(GridRect::new(0, 0, 1, 20), 12).h, 8);
        assert_eq!(clamp_layout(GridRect::new(0, 0, 1, 0), 12).h, 1);
        assert_eq!(clamp_layout_with(GridRect::new(0, 0, 1, 6), 12, 4).h, 4);
    }

    #[test]
    fn test_clamp_zero_width() {
        assert_eq!(clamp_layout(GridRect::new(0, 0, 0, 1), 12).w, 1);
    }

    #[test]
    fn test_clamp_keeps_footprint_addressable() {
        let rect = GridRect::new(0, u32::MAX - 2, 4, 3);
        assert_eq!(clamp_layout(rect, 12), rect);
        assert_eq!(clamp_layout(GridRect::new(0, u32::MAX, 4, 3), 12).y, u32::MAX - 2);
        assert_eq!(clamp_layout(GridRect::new(0, 200_000_000, 4, 3), 12).y, 200_000_000);
    }

    #[test]
    fn test_clamp_zero_columns() {
        let rect = clamp_layout(GridRect::new(5, 2, 3, 3), 0);
        assert_eq!(rect, GridRect::new(0, 2, 1, 3));
    }
}
