//! Raw key and pointer events mapped onto game commands

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    I,
    Escape,
    Other,
}

impl Key {
    /// Parse a key name as reported by a windowing backend or typed by hand
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "enter" | "return" => Key::Enter,
            "space" | " " => Key::Space,
            "i" => Key::I,
            "escape" | "esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            Key::Enter | Key::Space => Some(Command::Begin),
            Key::I => Some(Command::ShowInstructions),
            Key::Escape => Some(Command::Quit),
            Key::Other => None,
        }
    }
}

/// Discrete requests from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Begin,
    ShowInstructions,
    /// Close the window; handled by the driver
    Quit,
}

impl Command {
    /// Fold this command into the frame's input
    pub fn apply(&self, input: &mut TickInput) {
        match self {
            Command::Begin => input.begin = true,
            Command::ShowInstructions => input.show_instructions = true,
            Command::Quit => {}
        }
    }
}

/// Window coordinates are y-down; render space is y-up
#[inline]
pub fn window_to_render(x: f64, y: f64, window_height: f32) -> Vec2 {
    Vec2::new(x as f32, window_height - y as f32)
}
