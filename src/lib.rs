//! Lights Out - a 5x5 toggle puzzle
//!
//! Core modules:
//! - `sim`: Puzzle grid, session state machine and per-tick update
//! - `layout`: Cell rectangles and pointer hit testing
//! - `platform`: Key mapping, coordinate flips and clocks
//! - `settings`: Serializable configuration

pub mod layout;
pub mod platform;
pub mod settings;
pub mod sim;

pub use layout::{BoardLayout, CellRect};
pub use settings::Settings;
pub use sim::{GameSession, PuzzleGrid, Screen, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Grid dimensions (fixed 5x5)
    pub const GRID_WIDTH: usize = 5;
    pub const GRID_HEIGHT: usize = 5;
    pub const NUM_LIGHTS: usize = GRID_WIDTH * GRID_HEIGHT;

    /// Default window dimensions in pixels
    pub const WINDOW_WIDTH: f32 = 1300.0;
    pub const WINDOW_HEIGHT: f32 = 960.0;

    /// Spacing between neighbouring cells in the default layout
    pub const CELL_GAP: f32 = 16.0;

    /// Random presses used for a scrambled start
    pub const SCRAMBLE_PRESSES: u32 = 12;
}
