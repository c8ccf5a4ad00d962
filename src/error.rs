//! Centralized error types for the game.
//!
//! The simulation core has exactly two recoverable failure kinds, saving and
//! loading a game; both are stored on the state machine and surfaced on
//! screen rather than aborting. Everything else (SDL setup, asset decoding)
//! is fatal at startup and never occurs mid-game.

use std::io;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failure while persisting the running game.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failure while restoring a persisted game. None of these corrupt the live
/// simulation; loading parses into a fresh session that is only swapped in
/// on success.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("save file ended early at {0}")]
    Truncated(&'static str),

    #[error("invalid value {value:?} for {field}")]
    Malformed { field: &'static str, value: String },

    #[error("unknown {field} tag: {value}")]
    UnknownKind { field: &'static str, value: u8 },

    #[error("bar index {0} out of range")]
    BarOutOfRange(usize),
}

/// Errors related to loading sprites and fonts.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to load {path}: {message}")]
    LoadFailed { path: String, message: String },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
