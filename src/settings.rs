//! Game settings and preferences
//!
//! Stored as JSON next to the binary (or wherever the driver points).

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CELL_GAP, SCRAMBLE_PRESSES, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::layout::BoardLayout;
use crate::sim::StartPattern;

/// How scrambled the board is when a game begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Every light on
    #[default]
    Classic,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Classic => "Classic",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Difficulty::Classic),
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Random presses for a scrambled board, `None` for the classic start
    pub fn scramble_presses(&self) -> Option<u32> {
        match self {
            Difficulty::Classic => None,
            Difficulty::Easy => Some(3),
            Difficulty::Medium => Some(SCRAMBLE_PRESSES),
            Difficulty::Hard => Some(25),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Fixed scramble seed; unset picks a fresh one per run
    pub seed: Option<u64>,

    // === Window / layout ===
    pub window_width: f32,
    pub window_height: f32,
    /// Pixels between neighbouring cells
    pub cell_gap: f32,
    /// Cursor box edge in pixels (0 = point cursor)
    pub cursor_size: f32,

    // === Screens ===
    /// Offer the instructions page from the title screen
    pub show_instructions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Classic,
            seed: None,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_gap: CELL_GAP,
            cursor_size: 0.0,
            show_instructions: true,
        }
    }
}

impl Settings {
    /// Create settings for a difficulty, everything else default
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Cell geometry for the configured window
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::for_window(self.window_width, self.window_height, self.cell_gap)
    }

    pub fn cursor_extent(&self) -> Vec2 {
        Vec2::splat(self.cursor_size.max(0.0))
    }

    /// Board fill rule; `fallback_seed` is used when no seed is configured
    pub fn start_pattern(&self, fallback_seed: u64) -> StartPattern {
        match self.difficulty.scramble_presses() {
            None => StartPattern::AllLit,
            Some(presses) => StartPattern::Scrambled {
                seed: self.seed.unwrap_or(fallback_seed),
                presses,
            },
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
