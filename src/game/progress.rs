//! Decode progress evaluation
//!
//! Renders the ciphertext through the player's guesses and decides whether
//! the puzzle is solved. Each letter position is checked on its own: a
//! guess is right at a position when re-encrypting it gives back the cipher
//! letter found there. The player's key as a whole is never checked for
//! being one-to-one.

use crate::data::{EncryptionKey, Letter, PlayerKey};

/// Placeholder for a cipher letter the player has not guessed yet
pub const UNKNOWN: char = '_';

/// The player's current view of the puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Ciphertext with every letter replaced by its guess or `_`
    pub display: String,
    /// Letter positions still showing `_`
    pub unknown: usize,
    /// Letter positions showing a guess that does not re-encrypt correctly
    pub wrong: usize,
}

impl Progress {
    /// Every letter guessed and every guess consistent with the key
    pub fn is_complete(&self) -> bool {
        self.unknown == 0 && self.wrong == 0
    }
}

/// Evaluate `ciphertext` against the player's guesses
pub fn evaluate(ciphertext: &str, key: &EncryptionKey, guesses: &PlayerKey) -> Progress {
    let mut display = String::with_capacity(ciphertext.len());
    let mut unknown = 0;
    let mut wrong = 0;

    for c in ciphertext.chars() {
        let Some(cipher) = Letter::from_char(c) else {
            display.push(c);
            continue;
        };

        match guesses.get(cipher) {
            None => {
                unknown += 1;
                display.push(UNKNOWN);
            }
            Some(plain) => {
                if key.encrypt(plain) != cipher {
                    wrong += 1;
                }
                display.push(plain.to_char());
            }
        }
    }

    Progress {
        display,
        unknown,
        wrong,
    }
}
