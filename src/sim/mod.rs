//! Puzzle simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is passed in by the caller, never read
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod generate;
pub mod grid;
pub mod state;
pub mod tick;

pub use generate::{StartPattern, scramble};
pub use grid::{PuzzleGrid, index_of, neighbors, position};
pub use state::{GameEvent, GameSession, Screen};
pub use tick::{TickInput, tick};
