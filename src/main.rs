//! Lights Out entry point
//!
//! A line-driven terminal shell around the simulation: each line read from
//! stdin becomes one or two frames of input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use lights_out::consts::{GRID_WIDTH, NUM_LIGHTS};
use lights_out::platform::{Clock, Command, Key, SystemClock, window_to_render};
use lights_out::sim::{GameEvent, GameSession, Screen, TickInput, tick};
use lights_out::{Settings, sim};

const SETTINGS_FILE: &str = "lights-out.json";

/// Terminal game instance
struct Game {
    session: GameSession,
    settings: Settings,
    clock: SystemClock,
    input: TickInput,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
            .unwrap_or(0);
        let session = GameSession::new(settings.layout(), settings.start_pattern(seed));
        log::info!(
            "Game initialized ({} difficulty, seed {})",
            settings.difficulty.as_str(),
            settings.seed.unwrap_or(seed)
        );

        let input = TickInput {
            cursor_size: settings.cursor_extent(),
            ..Default::default()
        };
        Self {
            session,
            settings,
            clock: SystemClock::new(),
            input,
        }
    }

    fn frame(&mut self) {
        let now = self.clock.now_ms();
        tick(&mut self.session, &self.input, now);
        // Commands are one-shot
        self.input.begin = false;
        self.input.show_instructions = false;

        for event in self.session.drain_events() {
            if let GameEvent::Solved { moves, elapsed_ms } = event {
                println!("All lights out! {} moves in {:.1}s", moves, elapsed_ms / 1000.0);
            }
        }
    }

    fn key(&mut self, key: Key) -> bool {
        match key.command() {
            Some(Command::Quit) => return false,
            Some(Command::ShowInstructions) if !self.settings.show_instructions => {}
            Some(command) => command.apply(&mut self.input),
            None => println!("Unknown key"),
        }
        self.frame();
        true
    }

    /// Move the pointer to window coordinates (y-down)
    fn point(&mut self, x: f64, y: f64) {
        self.input.pointer = window_to_render(x, y, self.settings.window_height);
    }

    fn point_at_cell(&mut self, index: usize) {
        self.input.pointer = self.session.layout().cell(index).center;
    }

    /// Press on one frame, release on the next
    fn click(&mut self) {
        self.input.pointer_down = true;
        self.frame();
        self.input.pointer_down = false;
        self.frame();
    }

    fn handle(&mut self, line: &str) -> bool {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => self.frame(),
            ["click", index] => match index.parse::<usize>() {
                Ok(index) if index < NUM_LIGHTS => {
                    self.point_at_cell(index);
                    self.click();
                }
                _ => println!("Cell must be 0..{}", NUM_LIGHTS - 1),
            },
            ["click", x, y] | ["move", x, y] => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => {
                    self.point(x, y);
                    if words[0] == "click" {
                        self.click();
                    } else {
                        self.frame();
                    }
                }
                _ => println!("Coordinates must be numbers"),
            },
            [name] => return self.key(Key::from_name(name)),
            _ => println!("Commands: enter | i | esc | click <cell> | click <x> <y> | move <x> <y>"),
        }
        true
    }

    fn draw(&self) {
        let now = self.clock.now_ms();
        match self.session.screen() {
            Screen::Start => {
                println!("LIGHTS OUT");
                println!("Press enter to begin, i for instructions, esc to quit");
            }
            Screen::Instructions => {
                println!("Clicking a light toggles it and its four neighbours.");
                println!("Turn every light off. Press enter to begin.");
            }
            Screen::Play | Screen::Over => {
                let grid = self.session.grid();
                let hover = self.session.hover();
                for row in 0..NUM_LIGHTS / GRID_WIDTH {
                    let line: String = (0..GRID_WIDTH)
                        .map(|col| {
                            let index = sim::index_of(row, col).unwrap_or_default();
                            let lamp = if grid.is_lit(index) { '#' } else { '.' };
                            if hover.contains(&index) {
                                format!("[{lamp}]")
                            } else {
                                format!(" {lamp} ")
                            }
                        })
                        .collect();
                    println!("{line}");
                }
                let elapsed = self.session.elapsed_ms(now).unwrap_or(0.0);
                println!("Moves: {}  Time: {:.1}s", self.session.moves(), elapsed / 1000.0);
                if self.session.screen() == Screen::Over {
                    println!("Solved! Press esc to quit");
                }
            }
        }
    }
}

fn prompt() {
    print!("> ");
    if let Err(e) = io::stdout().flush() {
        log::warn!("Failed to flush stdout: {}", e);
    }
}

fn main() {
    env_logger::init();
    log::info!("Lights Out starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let settings = Settings::load(&path);
    let mut game = Game::new(settings);

    let stdin = io::stdin();
    game.draw();
    prompt();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            log::warn!("Failed to read input");
            break;
        };
        if !game.handle(line.trim()) {
            break;
        }
        game.draw();
        prompt();
    }

    log::info!("Lights Out exiting");
}
