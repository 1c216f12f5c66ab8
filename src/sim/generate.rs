//! Start-of-game board generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::PuzzleGrid;
use crate::consts::NUM_LIGHTS;

/// How the board is filled when a game begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StartPattern {
    /// Every light on
    #[default]
    AllLit,
    /// Random presses applied to a solved board
    Scrambled { seed: u64, presses: u32 },
    /// An exact board
    Fixed(PuzzleGrid),
}

impl StartPattern {
    pub fn build(&self) -> PuzzleGrid {
        match self {
            StartPattern::AllLit => PuzzleGrid::all_lit(),
            StartPattern::Scrambled { seed, presses } => scramble(*seed, *presses),
            StartPattern::Fixed(grid) => grid.clone(),
        }
    }
}

/// Press random cells on a solved board.
///
/// Every result is reachable from (and therefore solvable back to) the
/// all-off board. Never returns a solved board.
pub fn scramble(seed: u64, presses: u32) -> PuzzleGrid {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut grid = PuzzleGrid::all_off();

    for _ in 0..presses {
        grid.toggle(rng.random_range(0..NUM_LIGHTS));
    }
    // Presses can cancel out; one more always leaves lights on
    if grid.is_solved() {
        grid.toggle(rng.random_range(0..NUM_LIGHTS));
    }

    log::debug!(
        "Scrambled board (seed {}, {} presses): {} lit",
        seed,
        presses,
        grid.lit_count()
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_deterministic() {
        assert_eq!(scramble(42, 12), scramble(42, 12));
    }

    #[test]
    fn test_scramble_never_solved() {
        for seed in 0..64 {
            assert!(!scramble(seed, 0).is_solved());
            assert!(!scramble(seed, 2).is_solved());
        }
    }

    #[test]
    fn test_scramble_single_press() {
        // One press from all-off lights exactly one neighbourhood
        let grid = scramble(7, 1);
        assert!((3..=5).contains(&grid.lit_count()));
    }

    #[test]
    fn test_start_patterns() {
        assert_eq!(StartPattern::AllLit.build(), PuzzleGrid::all_lit());
        let fixed = PuzzleGrid::from_lit(&[3, 8]);
        assert_eq!(StartPattern::Fixed(fixed.clone()).build(), fixed);
        assert_eq!(
            StartPattern::Scrambled { seed: 9, presses: 5 }.build(),
            scramble(9, 5)
        );
    }
}
