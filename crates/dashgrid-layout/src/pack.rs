//! Collision-free packing.
//!
//! Widgets are placed in `(y, x)` order of their requested rectangles, so a
//! widget asking for a smaller row, then a smaller column, wins contested
//! cells. Each widget searches from its own requested row downward, never
//! from a shared cursor. Sizes are never changed; only positions move. A
//! widget with no room left below its row before the last addressable row
//! is placed in the nearest free rows above it instead.

use dashgrid_core::{GridRect, WidgetConfig, MAX_ROW_SPAN};
use tracing::trace;

use crate::clamp::clamp_layout_with;
use crate::occupancy::OccupancyGrid;

/// Pack widgets onto a grid of `columns` columns.
///
/// The result is in the same order as the input.
pub fn pack_widgets(widgets: &[WidgetConfig], columns: u32) -> Vec<WidgetConfig> {
    pack_widgets_with(widgets, columns, MAX_ROW_SPAN)
}

/// Pack widgets with a custom row-span cap.
pub fn pack_widgets_with(widgets: &[WidgetConfig], columns: u32, max_row_span: u32) -> Vec<WidgetConfig> {
    let columns = columns.max(1);
    let requested: Vec<GridRect> = widgets
        .iter()
        .map(|widget| clamp_layout_with(widget.layout, columns, max_row_span))
        .collect();

    // Stable, so equal (y, x) keys keep input order.
    let mut order: Vec<usize> = (0..widgets.len()).collect();
    order.sort_by_key(|&i| (requested[i].y, requested[i].x));

    let mut grid = OccupancyGrid::new(columns);
    let mut placed = requested.clone();
    for i in order {
        let want = requested[i];
        let rect = grid.find_free_slot(want.w, want.h, want.y, Some(want.x));
        if rect != want {
            trace!(id = %widgets[i].id, from_x = want.x, from_y = want.y, x = rect.x, y = rect.y, "displaced");
        }
        grid.occupy(&rect);
        placed[i] = rect;
    }

    widgets
        .iter()
        .zip(placed)
        .map(|(widget, rect)| widget.with_layout(rect))
        .collect()
}

/// Clamp and re-pack every widget for a new column count.
pub fn reflow(widgets: &[WidgetConfig], columns: u32) -> Vec<WidgetConfig> {
    reflow_with(widgets, columns, MAX_ROW_SPAN)
}

/// [`reflow`] with a custom row-span cap.
pub fn reflow_with(widgets: &[WidgetConfig], columns: u32, max_row_span: u32) -> Vec<WidgetConfig> {
    trace!(count = widgets.len(), columns, "reflow");
    pack_widgets_with(widgets, columns, max_row_span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(id: &str, x: u32, y: u32, w: u32, h: u32) -> WidgetConfig {
        WidgetConfig::new(id, "stats", GridRect::new(x, y, w, h))
    }

    fn layouts(widgets: &[WidgetConfig]) -> Vec<GridRect> {
        widgets.iter().map(|w| w.layout).collect()
    }

    #[test]
    fn test_pack_shifts_right_to_avoid_overlap() {
        let input = vec![
            widget("a", 0, 0, 6, 3),
            widget("b", 4, 0, 6, 3),
            widget("c", 0, 3, 12, 4),
        ];
        let packed = pack_widgets(&input, 12);
        assert_eq!(
            layouts(&packed),
            vec![
                GridRect::new(0, 0, 6, 3),
                GridRect::new(6, 0, 6, 3),
                GridRect::new(0, 3, 12, 4),
            ]
        );
    }

    #[test]
    fn test_pack_preserves_input_order() {
        let input = vec![widget("late", 0, 5, 2, 1), widget("early", 0, 0, 2, 1)];
        let packed = pack_widgets(&input, 12);
        assert_eq!(packed[0].id, "late");
        assert_eq!(packed[1].id, "early");
        assert_eq!(packed[0].layout, GridRect::new(0, 5, 2, 1));
    }

    #[test]
    fn test_pack_tie_break_keeps_input_order() {
        let input = vec![widget("first", 0, 0, 12, 1), widget("second", 0, 0, 12, 1)];
        let packed = pack_widgets(&input, 12);
        assert_eq!(packed[0].layout.y, 0);
        assert_eq!(packed[1].layout.y, 1);
    }

    #[test]
    fn test_pack_never_pulls_widgets_up() {
        let input = vec![widget("a", 0, 4, 3, 1)];
        let packed = pack_widgets(&input, 12);
        assert_eq!(packed[0].layout, GridRect::new(0, 4, 3, 1));
    }

    #[test]
    fn test_pack_starts_from_own_row() {
        // "b" sorts after "a" but asks for row 1; "a" occupies rows 0..3 on the left.
        let input = vec![widget("a", 0, 0, 8, 3), widget("b", 0, 1, 8, 1)];
        let packed = pack_widgets(&input, 12);
        assert_eq!(packed[1].layout, GridRect::new(0, 3, 8, 1));
    }

    #[test]
    fn test_pack_far_down_the_grid() {
        let input = vec![widget("a", 0, 200_000_000, 4, 3), widget("b", 0, u32::MAX - 2, 4, 3)];
        let packed = pack_widgets(&input, 12);
        assert_eq!(
            layouts(&packed),
            vec![GridRect::new(0, 200_000_000, 4, 3), GridRect::new(0, u32::MAX - 2, 4, 3)]
        );
    }

    #[test]
    fn test_pack_at_last_row_moves_up_when_blocked() {
        let input = vec![widget("a", 0, u32::MAX - 2, 12, 3), widget("b", 0, u32::MAX, 12, 2)];
        let packed = pack_widgets(&input, 12);
        assert_eq!(packed[0].layout, GridRect::new(0, u32::MAX - 2, 12, 3));
        assert_eq!(packed[1].layout, GridRect::new(0, u32::MAX - 4, 12, 2));
    }

    #[test]
    fn test_pack_clamps_before_placing() {
        let input = vec![widget("wide", 3, 0, 6, 12)];
        let packed = pack_widgets(&input, 4);
        assert_eq!(packed[0].layout, GridRect::new(0, 0, 4, 8));
    }

    #[test]
    fn test_pack_empty() {
        assert!(pack_widgets(&[], 12).is_empty());
    }

    #[test]
    fn test_reflow_to_mobile_stacks_widgets() {
        let input = vec![
            widget("a", 0, 0, 6, 2),
            widget("b", 6, 0, 6, 2),
            widget("c", 0, 2, 4, 1),
        ];
        let packed = reflow(&input, 4);
        assert_eq!(
            layouts(&packed),
            vec![
                GridRect::new(0, 0, 4, 2),
                GridRect::new(0, 2, 4, 2),
                GridRect::new(0, 4, 4, 1),
            ]
        );
    }

    #[test]
    fn test_pack_keeps_settings() {
        let input = vec![widget("a", 2, 0, 2, 2).with_setting("metric", serde_json::json!("velocity"))];
        let packed = pack_widgets(&input, 12);
        assert_eq!(packed[0].settings["metric"], "velocity");
    }
}
