//! Player input parsing

use crate::data::Letter;
use crate::GameError;

/// The word that ends a puzzle; matched exactly, case-sensitive
pub const QUIT_WORD: &str = "quit";

/// What a line of player input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `quit` or an empty line
    Quit,
    /// Two letters: cipher letter, then the plaintext letter it stands for
    Guess { cipher: Letter, plain: Letter },
}

impl Command {
    /// Parse one line as read from the terminal
    ///
    /// A single trailing line terminator is ignored. A guess is exactly two
    /// letters and must end the line; a pair cut off by end of input is not
    /// a guess. Anything else that is not quit or an empty line is
    /// `InvalidGuessFormat`.
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let terminated = line.ends_with('\n');
        let content = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line);

        if content.is_empty() || content == QUIT_WORD {
            return Ok(Command::Quit);
        }

        let mut chars = content.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) if terminated => {
                match (Letter::from_char(a), Letter::from_char(b)) {
                    (Some(cipher), Some(plain)) => Ok(Command::Guess { cipher, plain }),
                    _ => Err(GameError::InvalidGuessFormat(content.to_string())),
                }
            }
            _ => Err(GameError::InvalidGuessFormat(content.to_string())),
        }
    }
}
