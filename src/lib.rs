//! Cryptogram: a terminal substitution-cipher puzzle
//!
//! A quote is drawn from a corpus, every letter is swapped through a
//! freshly shuffled alphabet, and the player recovers the text by guessing
//! the substitution one letter pair at a time.
//!
//! # Game Mechanics
//!
//! - **Encryption**: a random permutation of A-Z; punctuation and spacing
//!   stay where they are
//! - **Guessing**: enter `XY` to say cipher letter X decodes to Y; later
//!   guesses overwrite earlier ones
//! - **Progress**: unknown letters show as `_`, wrong guesses are shown but
//!   keep the puzzle unsolved
//!
//! # Architecture
//!
//! - `data` - Letters, keys and the quote corpus
//! - `game` - Cipher engine, progress evaluator, session state machine
//! - `tui` - Line-based terminal channel and the outer game loop

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Session;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Quote corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("Invalid guess format: {0:?}")]
    InvalidGuessFormat(String),

    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),
}

/// Process exit status for an error that ended the game
///
/// 1 when the quote corpus could not be loaded, 2 for anything else.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<GameError>() {
        Some(GameError::CorpusUnavailable(_)) => 1,
        _ => 2,
    }
}
