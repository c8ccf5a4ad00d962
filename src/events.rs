//! The command vocabulary the input layer resolves raw events into.

/// A discrete action requested by the player. The input layer resolves raw
/// key, button, and axis events into these against the current state; the
/// state machine consumes nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Up,
    Down,
    Confirm,
    TogglePause,
    FireShotglass,
    FireFireball,
    SaveGame,
    Reset,
    ToggleInvincible,
    Exit,
}
