//! Translates SDL keyboard, controller, and axis events into game commands.
//!
//! Resolution is context-sensitive: the same key or button can mean
//! different things in different states (Space confirms in the menu but
//! pauses in game). The state machine itself never sees raw events.

use sdl2::controller::{Axis, Button};
use sdl2::keyboard::Keycode;

use crate::constants::input::{AXIS_THRESHOLD, GAME_AXIS_INTERVAL_MS, MENU_AXIS_INTERVAL_MS};
use crate::events::GameCommand;
use crate::game::GameState;

/// Resolves a key press against the current state.
pub fn key_command(state: GameState, key: Keycode) -> Option<GameCommand> {
    if key == Keycode::Escape {
        return Some(GameCommand::Exit);
    }

    match state {
        GameState::MainMenu => match key {
            Keycode::Up => Some(GameCommand::Up),
            Keycode::Down => Some(GameCommand::Down),
            Keycode::Return | Keycode::Space => Some(GameCommand::Confirm),
            _ => None,
        },
        GameState::Instructions => match key {
            Keycode::Return | Keycode::Space | Keycode::P => Some(GameCommand::Confirm),
            _ => None,
        },
        GameState::InGame => match key {
            Keycode::Space | Keycode::P => Some(GameCommand::TogglePause),
            Keycode::Up => Some(GameCommand::Up),
            Keycode::Down => Some(GameCommand::Down),
            Keycode::Z => Some(GameCommand::FireShotglass),
            Keycode::X => Some(GameCommand::FireFireball),
            Keycode::I => Some(GameCommand::ToggleInvincible),
            Keycode::R => Some(GameCommand::Reset),
            _ => None,
        },
        GameState::Paused => match key {
            Keycode::Space | Keycode::P => Some(GameCommand::TogglePause),
            Keycode::S => Some(GameCommand::SaveGame),
            Keycode::R => Some(GameCommand::Reset),
            _ => None,
        },
        // Any key dismisses the game-over screen.
        GameState::GameOver => Some(GameCommand::Confirm),
    }
}

/// Resolves a controller button press against the current state.
pub fn button_command(state: GameState, button: Button) -> Option<GameCommand> {
    if button == Button::Back {
        return Some(GameCommand::Exit);
    }

    match state {
        GameState::MainMenu => match button {
            Button::DPadUp => Some(GameCommand::Up),
            Button::DPadDown => Some(GameCommand::Down),
            Button::A | Button::B | Button::X | Button::Y => Some(GameCommand::Confirm),
            _ => None,
        },
        GameState::Instructions => match button {
            Button::A | Button::B | Button::X | Button::Y => Some(GameCommand::Confirm),
            _ => None,
        },
        GameState::InGame => match button {
            Button::Start => Some(GameCommand::TogglePause),
            Button::DPadUp => Some(GameCommand::Up),
            Button::DPadDown => Some(GameCommand::Down),
            Button::A => Some(GameCommand::FireShotglass),
            Button::B => Some(GameCommand::FireFireball),
            Button::X => Some(GameCommand::ToggleInvincible),
            Button::Y => Some(GameCommand::Reset),
            _ => None,
        },
        GameState::Paused => match button {
            Button::Start => Some(GameCommand::TogglePause),
            Button::X => Some(GameCommand::SaveGame),
            Button::Y => Some(GameCommand::Reset),
            _ => None,
        },
        GameState::GameOver => Some(GameCommand::Confirm),
    }
}

/// Rate gate that turns the continuous left-stick Y axis into discrete
/// up/down steps. Menus step at most every 100 ms, gameplay every 50 ms,
/// measured against the SDL event timestamp.
#[derive(Debug, Default)]
pub struct AxisGate {
    last_step_ms: u32,
}

impl AxisGate {
    pub fn resolve(&mut self, state: GameState, axis: Axis, value: i16, timestamp_ms: u32) -> Option<GameCommand> {
        if axis != Axis::LeftY {
            return None;
        }

        let interval = match state {
            GameState::MainMenu => MENU_AXIS_INTERVAL_MS,
            GameState::InGame => GAME_AXIS_INTERVAL_MS,
            _ => return None,
        };

        if timestamp_ms.wrapping_sub(self.last_step_ms) < interval {
            return None;
        }
        self.last_step_ms = timestamp_ms;

        if value < -AXIS_THRESHOLD {
            Some(GameCommand::Up)
        } else if value > AXIS_THRESHOLD {
            Some(GameCommand::Down)
        } else {
            None
        }
    }
}
