//! The 5x5 light matrix and the toggle rule
//!
//! Cells are stored row-major: index `i` sits at row `i / 5`, column `i % 5`.
//! A press flips the cell and its orthogonal neighbours, clipped at the edges.

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_HEIGHT, GRID_WIDTH, NUM_LIGHTS};

/// Row and column for a linear cell index
#[inline]
pub fn position(index: usize) -> (usize, usize) {
    assert!(index < NUM_LIGHTS, "cell index {index} out of range");
    (index / GRID_WIDTH, index % GRID_WIDTH)
}

/// Linear index for a row/column pair, `None` when outside the grid
#[inline]
pub fn index_of(row: usize, col: usize) -> Option<usize> {
    (row < GRID_HEIGHT && col < GRID_WIDTH).then_some(row * GRID_WIDTH + col)
}

/// Cells affected by pressing `index`: itself plus its in-bounds
/// orthogonal neighbours, ascending.
pub fn neighbors(index: usize) -> Vec<usize> {
    let (row, col) = position(index);
    let mut out = Vec::with_capacity(5);

    if let Some(up) = row.checked_sub(1).and_then(|r| index_of(r, col)) {
        out.push(up);
    }
    if let Some(left) = col.checked_sub(1).and_then(|c| index_of(row, c)) {
        out.push(left);
    }
    out.push(index);
    if let Some(right) = index_of(row, col + 1) {
        out.push(right);
    }
    if let Some(down) = index_of(row + 1, col) {
        out.push(down);
    }
    out
}

/// The puzzle board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleGrid {
    cells: [bool; NUM_LIGHTS],
}

impl Default for PuzzleGrid {
    fn default() -> Self {
        Self::all_lit()
    }
}

impl PuzzleGrid {
    /// Classic start: every light on
    pub fn all_lit() -> Self {
        Self {
            cells: [true; NUM_LIGHTS],
        }
    }

    /// Solved board: every light off
    pub fn all_off() -> Self {
        Self {
            cells: [false; NUM_LIGHTS],
        }
    }

    /// Board with exactly the given cells lit
    pub fn from_lit(lit: &[usize]) -> Self {
        let mut grid = Self::all_off();
        for &index in lit {
            assert!(index < NUM_LIGHTS, "cell index {index} out of range");
            grid.cells[index] = true;
        }
        grid
    }

    pub fn from_cells(cells: [bool; NUM_LIGHTS]) -> Self {
        Self { cells }
    }

    /// Raw cell states, row-major
    pub fn cells(&self) -> &[bool; NUM_LIGHTS] {
        &self.cells
    }

    /// Whether the light at `index` is on
    pub fn cell_state(&self, index: usize) -> bool {
        assert!(index < NUM_LIGHTS, "cell index {index} out of range");
        self.cells[index]
    }

    #[inline]
    pub fn is_lit(&self, index: usize) -> bool {
        self.cell_state(index)
    }

    /// Press `index`, flipping its whole neighbourhood.
    ///
    /// Panics if `index` is not a cell of the grid.
    pub fn toggle(&mut self, index: usize) {
        for i in neighbors(index) {
            self.cells[i] = !self.cells[i];
        }
    }

    /// True once every light is off
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|lit| !lit)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_neighbor_counts() {
        let sizes: Vec<usize> = (0..NUM_LIGHTS).map(|i| neighbors(i).len()).collect();
        assert_eq!(sizes.iter().filter(|&&n| n == 3).count(), 4);
        assert_eq!(sizes.iter().filter(|&&n| n == 4).count(), 12);
        assert_eq!(sizes.iter().filter(|&&n| n == 5).count(), 9);
    }

    #[test]
    fn test_neighbors_well_formed() {
        for i in 0..NUM_LIGHTS {
            let n = neighbors(i);
            assert!(n.contains(&i));
            assert!(n.iter().all(|&j| j < NUM_LIGHTS));
            assert!(n.windows(2).all(|w| w[0] < w[1]), "{n:?} not strictly ascending");
        }
    }

    #[test]
    fn test_neighbors_no_wraparound() {
        // Right edge of row 0 must not reach the start of row 1
        assert_eq!(neighbors(4), vec![3, 4, 9]);
        assert_eq!(neighbors(5), vec![0, 5, 6, 10]);
        assert_eq!(neighbors(24), vec![19, 23, 24]);
        assert_eq!(neighbors(12), vec![7, 11, 12, 13, 17]);
    }

    #[test]
    fn test_corner_toggle() {
        let mut grid = PuzzleGrid::all_off();
        grid.toggle(0);
        assert_eq!(grid, PuzzleGrid::from_lit(&[0, 1, 5]));
    }

    #[test]
    fn test_center_toggle_from_all_lit() {
        let mut grid = PuzzleGrid::all_lit();
        grid.toggle(12);
        for i in 0..NUM_LIGHTS {
            let flipped = [7, 11, 12, 13, 17].contains(&i);
            assert_eq!(grid.cell_state(i), !flipped, "cell {i}");
        }
    }

    #[test]
    fn test_is_solved() {
        assert!(PuzzleGrid::all_off().is_solved());
        assert!(!PuzzleGrid::all_lit().is_solved());
        for i in 0..NUM_LIGHTS {
            assert!(!PuzzleGrid::from_lit(&[i]).is_solved());
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_toggle_out_of_range() {
        PuzzleGrid::all_lit().toggle(NUM_LIGHTS);
    }

    #[test]
    fn test_index_helpers() {
        assert_eq!(position(13), (2, 3));
        assert_eq!(index_of(2, 3), Some(13));
        assert_eq!(index_of(5, 0), None);
        assert_eq!(index_of(0, 5), None);
    }

    fn grid_strategy() -> impl Strategy<Value = PuzzleGrid> {
        proptest::array::uniform25(any::<bool>()).prop_map(PuzzleGrid::from_cells)
    }

    proptest! {
        #[test]
        fn double_toggle_is_identity(grid in grid_strategy(), i in 0..NUM_LIGHTS) {
            let mut toggled = grid.clone();
            toggled.toggle(i);
            toggled.toggle(i);
            prop_assert_eq!(toggled, grid);
        }

        #[test]
        fn toggles_commute(grid in grid_strategy(), a in 0..NUM_LIGHTS, b in 0..NUM_LIGHTS) {
            let mut ab = grid.clone();
            ab.toggle(a);
            ab.toggle(b);
            let mut ba = grid;
            ba.toggle(b);
            ba.toggle(a);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn toggle_changes_only_neighborhood(grid in grid_strategy(), i in 0..NUM_LIGHTS) {
            let mut toggled = grid.clone();
            toggled.toggle(i);
            let hood = neighbors(i);
            for j in 0..NUM_LIGHTS {
                prop_assert_eq!(toggled.cell_state(j) != grid.cell_state(j), hood.contains(&j));
            }
        }

        #[test]
        fn solved_iff_no_lights(grid in grid_strategy()) {
            prop_assert_eq!(grid.is_solved(), grid.lit_count() == 0);
        }
    }
}
