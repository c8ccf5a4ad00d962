//! The game state machine and per-state command handling.

pub mod save;
pub mod scoring;
pub mod session;

pub use scoring::Stat;
pub use session::Session;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::entity::ProjectileKind;
use crate::error::{LoadError, SaveError};
use crate::events::GameCommand;

/// The discrete application states. Simulation advances only in `InGame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    Instructions,
    InGame,
    Paused,
    GameOver,
}

/// Entries on the main menu: Start, Continue, Instructions.
pub const MENU_ITEMS: usize = 3;

/// The whole game: current state, menu cursor, the live simulation session,
/// and the persistence status the menus display. Everything the renderer
/// needs each frame is readable from here.
pub struct Game {
    pub state: GameState,
    pub cursor: usize,
    pub session: Session,
    pub invincible: bool,
    /// Whether the current pause already used its one save.
    pub saved: bool,
    pub save_error: Option<SaveError>,
    pub load_error: Option<LoadError>,
    pub exit: bool,
    save_path: PathBuf,
}

impl Game {
    pub fn new(save_path: PathBuf, invincible: bool) -> Self {
        Self {
            state: GameState::MainMenu,
            cursor: 0,
            session: Session::new(),
            invincible,
            saved: false,
            save_error: None,
            load_error: None,
            exit: false,
            save_path,
        }
    }

    /// Applies one resolved command to the current state.
    pub fn apply(&mut self, command: GameCommand) {
        if command == GameCommand::Exit {
            info!("Exit requested");
            self.exit = true;
            return;
        }

        match self.state {
            GameState::MainMenu => self.menu_command(command),
            GameState::Instructions => {
                if command == GameCommand::Confirm {
                    self.state = GameState::MainMenu;
                }
            }
            GameState::InGame => self.play_command(command),
            GameState::Paused => self.pause_command(command),
            // Game over is transient: any input falls back to the menu with
            // everything reset.
            GameState::GameOver => self.reset(),
        }
    }

    /// Advances the simulation by one fixed step when in game.
    pub fn tick(&mut self) {
        if self.state != GameState::InGame {
            return;
        }
        if self.session.step(self.invincible) {
            info!(score = self.session.stat.score, "Out of lives, game over");
            self.state = GameState::GameOver;
        }
    }

    fn menu_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Up => {
                self.cursor = if self.cursor == 0 { MENU_ITEMS - 1 } else { self.cursor - 1 };
            }
            GameCommand::Down => {
                self.cursor = (self.cursor + 1) % MENU_ITEMS;
            }
            GameCommand::Confirm => match self.cursor {
                1 => self.load_game(),
                2 => self.state = GameState::Instructions,
                _ => {
                    self.reset();
                    info!("Starting new game");
                    self.state = GameState::InGame;
                }
            },
            _ => {}
        }
    }

    fn play_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Up => self.session.dragon.move_up(),
            GameCommand::Down => self.session.dragon.move_down(),
            GameCommand::FireShotglass => self.session.fire(ProjectileKind::Shotglass),
            GameCommand::FireFireball => self.session.fire(ProjectileKind::Fireball),
            GameCommand::TogglePause => {
                self.state = GameState::Paused;
                // Each pause gets one save.
                self.saved = false;
            }
            GameCommand::ToggleInvincible => {
                self.invincible = !self.invincible;
                info!(invincible = self.invincible, "Toggled invincibility");
            }
            GameCommand::Reset => self.state = GameState::MainMenu,
            _ => {}
        }
    }

    fn pause_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::TogglePause => self.state = GameState::InGame,
            GameCommand::SaveGame => self.save_game(),
            GameCommand::Reset => self.state = GameState::MainMenu,
            _ => {}
        }
    }

    fn load_game(&mut self) {
        self.reset();
        match save::load(&self.save_path) {
            Ok(session) => {
                info!(path = %self.save_path.display(), "Loaded saved game");
                self.session = session;
                self.state = GameState::Paused;
            }
            Err(error) => {
                warn!(%error, "Failed to load saved game");
                self.load_error = Some(error);
            }
        }
    }

    fn save_game(&mut self) {
        if self.saved {
            return;
        }
        match save::save(&self.save_path, &self.session) {
            Ok(()) => {
                info!(path = %self.save_path.display(), "Saved game");
                self.save_error = None;
            }
            Err(error) => {
                warn!(%error, "Failed to save game");
                self.save_error = Some(error);
            }
        }
        self.saved = true;
    }

    /// Replaces the simulation with a fresh session and returns to the menu.
    fn reset(&mut self) {
        self.session = Session::new();
        self.saved = false;
        self.save_error = None;
        self.load_error = None;
        self.state = GameState::MainMenu;
    }
}
