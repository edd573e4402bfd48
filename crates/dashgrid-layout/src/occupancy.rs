//! Cell occupancy tracking for the packer.

use std::collections::BTreeMap;

use dashgrid_core::GridRect;
use smallvec::{smallvec, SmallVec};

type Row = SmallVec<[bool; 16]>;

/// Set of occupied cells on a grid of fixed width and unbounded height.
///
/// Only rows holding an occupied cell are stored, so a widget far down the
/// grid costs the same as one at the top. Missing rows are free.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    columns: u32,
    rows: BTreeMap<u32, Row>,
}

impl OccupancyGrid {
    pub fn new(columns: u32) -> Self {
        Self {
            columns: columns.max(1),
            rows: BTreeMap::new(),
        }
    }

    /// Build a grid with every given rectangle already marked.
    pub fn from_rects<'a>(columns: u32, rects: impl IntoIterator<Item = &'a GridRect>) -> Self {
        let mut grid = Self::new(columns);
        for rect in rects {
            grid.occupy(rect);
        }
        grid
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows holding at least one occupied cell.
    pub fn occupied_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(col as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Whether the whole footprint lies inside the grid and is unoccupied.
    pub fn is_free(&self, rect: &GridRect) -> bool {
        if rect.w == 0 || rect.x as u64 + rect.w as u64 > self.columns as u64 {
            return false;
        }
        let Some(last) = rect.last_row() else {
            return false;
        };
        let (left, right) = (rect.x as usize, (rect.x + rect.w) as usize);
        self.rows
            .range(rect.y..=last)
            .all(|(_, cells)| !cells[left..right].contains(&true))
    }

    /// Mark a footprint as taken. Cells past the right edge are ignored.
    pub fn occupy(&mut self, rect: &GridRect) {
        let right = rect.right().min(self.columns) as usize;
        let left = (rect.x as usize).min(right);
        if left == right {
            return;
        }
        let columns = self.columns as usize;
        for row in (0..rect.h).map_while(|dy| rect.y.checked_add(dy)) {
            let cells = self.rows.entry(row).or_insert_with(|| smallvec![false; columns]);
            cells[left..right].fill(true);
        }
    }

    /// First free `w × h` slot at or below `from_row`.
    ///
    /// Rows are scanned top to bottom. Within a row `preferred_x` is tried
    /// first, then every column left to right. `w` is capped to the grid
    /// width. When nothing fits above the last addressable row, the rows
    /// above `from_row` are scanned upward instead.
    pub fn find_free_slot(&self, w: u32, h: u32, from_row: u32, preferred_x: Option<u32>) -> GridRect {
        let w = w.clamp(1, self.columns);
        let h = h.max(1);
        let last_start = u32::MAX - (h - 1);
        let start = from_row.min(last_start);

        (start..=last_start)
            .chain((0..start).rev())
            .find_map(|row| self.free_in_row(row, w, h, preferred_x))
            // Only reached when every row of the grid is taken.
            .unwrap_or_else(|| GridRect::new(0, start, w, h))
    }

    fn free_in_row(&self, row: u32, w: u32, h: u32, preferred_x: Option<u32>) -> Option<GridRect> {
        preferred_x
            .into_iter()
            .chain(0..=self.columns - w)
            .map(|x| GridRect::new(x, row, w, h))
            .find(|candidate| self.is_free(candidate))
    }
}
