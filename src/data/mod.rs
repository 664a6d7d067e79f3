//! Data structures for the puzzle
//!
//! Defines letters, cipher keys and the quote corpus.

pub mod key;
pub mod quotes;

pub use key::*;
pub use quotes::*;

use uuid::Uuid;

/// Number of letters in the puzzle alphabet
pub const ALPHABET_LEN: usize = 26;

/// A letter of the A-Z alphabet, stored as its index 0-25
///
/// Case-insensitive: `'q'` and `'Q'` are the same letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Letter for an ASCII alphabetic character, either case
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// All 26 letters in order
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_ignore_case() {
        assert_eq!(Letter::from_char('a'), Letter::from_char('A'));
        assert_eq!(Letter::from_char('z').map(Letter::index), Some(25));
        assert_eq!(Letter::from_char('m').map(Letter::to_char), Some('M'));
    }

    #[test]
    fn non_letters_have_no_index() {
        for c in ['1', ' ', '!', '_', '\n', 'é'] {
            assert_eq!(Letter::from_char(c), None, "{:?}", c);
        }
    }

    #[test]
    fn all_letters_in_order() {
        let text: String = Letter::all().map(Letter::to_char).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
