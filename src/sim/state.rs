//! Session state: current screen, board, moves and timing

use serde::{Deserialize, Serialize};

use super::generate::StartPattern;
use super::grid::PuzzleGrid;
use crate::layout::BoardLayout;

/// Top-level mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Screen {
    /// Title screen, waiting for begin or instructions
    #[default]
    Start,
    /// How-to-play page
    Instructions,
    /// Active puzzle
    Play,
    /// Board solved
    Over,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Start => "Start",
            Screen::Instructions => "Instructions",
            Screen::Play => "Play",
            Screen::Over => "Over",
        }
    }
}

/// Notifications produced while ticking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScreenChanged { from: Screen, to: Screen },
    Toggled { index: usize, moves: u32 },
    Solved { moves: u32, elapsed_ms: f64 },
}

/// One player's run through the screens
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) screen: Screen,
    pub(crate) grid: PuzzleGrid,
    pub(crate) moves: u32,
    /// Clock value (ms) when Play was entered
    pub(crate) start_time: Option<f64>,
    /// Clock value (ms) when the board was solved
    pub(crate) end_time: Option<f64>,
    /// Cells under the pointer this tick; replaced every tick
    pub(crate) hover: Vec<usize>,
    pub(crate) pointer_down_last_frame: bool,
    pub(crate) layout: BoardLayout,
    pub(crate) start_pattern: StartPattern,
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BoardLayout::default(), StartPattern::AllLit)
    }
}

impl GameSession {
    pub fn new(layout: BoardLayout, start_pattern: StartPattern) -> Self {
        Self {
            screen: Screen::Start,
            grid: start_pattern.build(),
            moves: 0,
            start_time: None,
            end_time: None,
            hover: Vec::new(),
            pointer_down_last_frame: false,
            layout,
            start_pattern,
            events: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn grid(&self) -> &PuzzleGrid {
        &self.grid
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<f64> {
        self.end_time
    }

    /// Cells to outline this frame
    pub fn hover(&self) -> &[usize] {
        &self.hover
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Time on the clock: running during Play, frozen once Over
    pub fn elapsed_ms(&self, now: f64) -> Option<f64> {
        match (self.screen, self.start_time, self.end_time) {
            (Screen::Play, Some(start), _) => Some(now - start),
            (Screen::Over, Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_screen(&mut self, to: Screen) {
        let from = self.screen;
        if from == to {
            return;
        }
        log::info!("Screen {} -> {}", from.as_str(), to.as_str());
        self.screen = to;
        self.events.push(GameEvent::ScreenChanged { from, to });
    }

    /// Enter Play with a fresh board
    pub(crate) fn begin(&mut self, now: f64) {
        self.grid = self.start_pattern.build();
        self.moves = 0;
        self.start_time = Some(now);
        self.end_time = None;
        self.set_screen(Screen::Play);
        log::info!("Game started with {} lights on", self.grid.lit_count());
    }

    /// Apply one move; returns true when it solved the board
    pub(crate) fn press(&mut self, index: usize, now: f64) -> bool {
        self.grid.toggle(index);
        self.moves += 1;
        log::debug!("Toggled cell {} (move {})", index, self.moves);
        self.events.push(GameEvent::Toggled {
            index,
            moves: self.moves,
        });

        if !self.grid.is_solved() {
            return false;
        }

        self.end_time = Some(now);
        let elapsed_ms = self.start_time.map_or(0.0, |start| now - start);
        log::info!("Solved in {} moves, {:.1}s", self.moves, elapsed_ms / 1000.0);
        self.events.push(GameEvent::Solved {
            moves: self.moves,
            elapsed_ms,
        });
        self.set_screen(Screen::Over);
        true
    }
}
