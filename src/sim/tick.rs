//! Per-frame session update
//!
//! The driver samples input and the clock once per frame and hands both to
//! [`tick`]. Nothing here blocks or schedules work.

use glam::Vec2;

use super::state::{GameSession, Screen};

/// Input sampled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in render space (y-up)
    pub pointer: Vec2,
    /// Pointer button held this frame
    pub pointer_down: bool,
    /// Size of the cursor box; zero treats the pointer as a point
    pub cursor_size: Vec2,
    /// Start (or resume from instructions into) a game
    pub begin: bool,
    /// Open the instructions page from the title screen
    pub show_instructions: bool,
}

/// Advance the session by one frame at clock value `now` (ms)
pub fn tick(session: &mut GameSession, input: &TickInput, now: f64) {
    // Hover outline is rebuilt from scratch on every screen
    session.hover = session.layout.hits(input.pointer, input.cursor_size);

    match session.screen {
        Screen::Start => {
            if input.begin {
                session.begin(now);
            } else if input.show_instructions {
                session.set_screen(Screen::Instructions);
            }
        }
        Screen::Instructions => {
            if input.begin {
                session.begin(now);
            }
        }
        Screen::Play => {
            let released = session.pointer_down_last_frame && !input.pointer_down;
            if released {
                let hits = session.hover.clone();
                for index in hits {
                    if session.press(index, now) {
                        break;
                    }
                }
            }
        }
        Screen::Over => {}
    }

    session.pointer_down_last_frame = input.pointer_down;
}
