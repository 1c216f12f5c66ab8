//! Cell geometry in render space
//!
//! Render space is y-up with the origin at the bottom-left of the window.
//! Each cell is an axis-aligned box described by its center and size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_HEIGHT, GRID_WIDTH, NUM_LIGHTS};

/// Axis-aligned cell rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl CellRect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }

    /// Half-open containment, so abutting cells never both claim a point
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &CellRect) -> bool {
        let d = (self.center - other.center).abs();
        let reach = (self.size + other.size) / 2.0;
        d.x < reach.x && d.y < reach.y
    }
}

/// Bounding boxes for all 25 cells, indexed like the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    cells: [CellRect; NUM_LIGHTS],
}

impl Default for BoardLayout {
    fn default() -> Self {
        use crate::consts::{CELL_GAP, WINDOW_HEIGHT, WINDOW_WIDTH};
        Self::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_GAP)
    }
}

impl BoardLayout {
    /// Use rectangles supplied by the geometry layer
    pub fn new(cells: [CellRect; NUM_LIGHTS]) -> Self {
        Self { cells }
    }

    /// Split the window into equal slots, row 0 at the top, with `gap`
    /// pixels between neighbouring cells.
    pub fn for_window(width: f32, height: f32, gap: f32) -> Self {
        let slot = Vec2::new(width / GRID_WIDTH as f32, height / GRID_HEIGHT as f32);
        let size = (slot - Vec2::splat(gap)).max(Vec2::ZERO);

        let cells = std::array::from_fn(|index| {
            let row = index / GRID_WIDTH;
            let col = index % GRID_WIDTH;
            let center = Vec2::new(
                (col as f32 + 0.5) * slot.x,
                height - (row as f32 + 0.5) * slot.y,
            );
            CellRect::new(center, size)
        });

        Self { cells }
    }

    pub fn cell(&self, index: usize) -> &CellRect {
        &self.cells[index]
    }

    /// Cells under the pointer, ascending.
    ///
    /// With a zero `cursor_size` the pointer is a point; otherwise it is a
    /// box of that size centered on the pointer and may touch several cells.
    pub fn hits(&self, pointer: Vec2, cursor_size: Vec2) -> Vec<usize> {
        if cursor_size == Vec2::ZERO {
            return self
                .cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.contains(pointer))
                .map(|(i, _)| i)
                .collect();
        }

        let cursor = CellRect::new(pointer, cursor_size);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.overlaps(&cursor))
            .map(|(i, _)| i)
            .collect()
    }
}
