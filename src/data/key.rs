//! Encryption keys and the player's guessed key

use super::{Letter, ALPHABET_LEN};
use crate::GameError;
use log::trace;
use rand::Rng;

/// The secret substitution for one puzzle
///
/// Indexed by plaintext letter, yields the ciphertext letter. Always a
/// permutation of A-Z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionKey {
    letters: [Letter; ALPHABET_LEN],
}

impl EncryptionKey {
    /// Shuffle A-Z into a fresh key (Fisher-Yates)
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = identity();
        for i in (1..ALPHABET_LEN).rev() {
            let j = rng.gen_range(0..=i);
            letters.swap(i, j);
        }

        let key = Self { letters };
        trace!("Generated key {}", key);
        key
    }

    /// Build a key from an explicit cipher alphabet, e.g. `"XYZ...ABC"`
    ///
    /// Position `i` of `alphabet` is the cipher letter for plaintext letter
    /// `i`. Rejects anything that is not exactly a permutation of A-Z.
    pub fn from_letters(alphabet: &str) -> Result<Self, GameError> {
        let chars: Vec<char> = alphabet.chars().collect();
        if chars.len() != ALPHABET_LEN {
            return Err(GameError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN,
                chars.len()
            )));
        }

        let mut letters = identity();
        let mut seen = [false; ALPHABET_LEN];
        for (slot, c) in letters.iter_mut().zip(chars) {
            let letter = Letter::from_char(c)
                .ok_or_else(|| GameError::InvalidKey(format!("{:?} is not a letter", c)))?;
            if seen[letter.index()] {
                return Err(GameError::InvalidKey(format!("{} appears twice", letter)));
            }
            seen[letter.index()] = true;
            *slot = letter;
        }

        Ok(Self { letters })
    }

    /// Ciphertext letter for a plaintext letter
    pub fn encrypt(&self, plain: Letter) -> Letter {
        self.letters[plain.index()]
    }

    /// The complete, correct player key for this encryption key
    pub fn inverse(&self) -> PlayerKey {
        let mut key = PlayerKey::new();
        for plain in Letter::all() {
            key.record_guess(self.encrypt(plain), plain);
        }
        key
    }

    pub fn letters(&self) -> &[Letter; ALPHABET_LEN] {
        &self.letters
    }
}

impl std::fmt::Display for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

fn identity() -> [Letter; ALPHABET_LEN] {
    std::array::from_fn(|i| Letter(i as u8))
}

/// The player's guessed inverse mapping
///
/// Indexed by ciphertext letter, yields the guessed plaintext letter. Any
/// slot may be unset; two cipher letters may share a guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerKey {
    guesses: [Option<Letter>; ALPHABET_LEN],
}

impl PlayerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `cipher` to `plain`, replacing any earlier guess for `cipher`
    pub fn record_guess(&mut self, cipher: Letter, plain: Letter) {
        self.guesses[cipher.index()] = Some(plain);
    }

    pub fn get(&self, cipher: Letter) -> Option<Letter> {
        self.guesses[cipher.index()]
    }

    /// Number of cipher letters with a guess
    pub fn guessed_count(&self) -> usize {
        self.guesses.iter().filter(|g| g.is_some()).count()
    }
}
