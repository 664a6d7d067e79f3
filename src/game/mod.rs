//! Core game logic and state management

pub mod cipher;
pub mod input;
pub mod progress;

pub use input::Command;
pub use progress::Progress;

use crate::data::*;
use crate::GameError;
use chrono::{DateTime, Utc};
use log::{debug, info, trace};
use rand::Rng;

/// Where a puzzle session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Solved,  // Only reached with auto-finish
    Quit,
}

impl SessionState {
    pub fn is_over(&self) -> bool {
        !matches!(self, SessionState::AwaitingGuess)
    }
}

/// What one line of input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A guess was recorded
    Guessed { cipher: Letter, plain: Letter },
    /// The line was not understood; nothing changed
    Rejected(GameError),
    /// The player quit
    Quit,
    /// A guess completed the puzzle and auto-finish ended the session
    Solved,
}

/// One puzzle, from quote selection until the player is done with it
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Id,
    pub started_at: DateTime<Utc>,
    quote: Quote,
    key: EncryptionKey,
    ciphertext: String,
    guesses: PlayerKey,
    state: SessionState,
    guesses_made: u32,
    auto_finish: bool,
}

impl Session {
    /// Start a puzzle for `quote` with a freshly generated key
    pub fn start<R: Rng + ?Sized>(quote: Quote, rng: &mut R) -> Self {
        let key = EncryptionKey::generate(rng);
        Self::with_key(quote, key)
    }

    /// Start a puzzle for `quote` with a known key
    pub fn with_key(quote: Quote, key: EncryptionKey) -> Self {
        let ciphertext = cipher::encrypt(&quote.body, &key);
        let session = Self {
            id: Id::new(),
            started_at: Utc::now(),
            quote,
            key,
            ciphertext,
            guesses: PlayerKey::new(),
            state: SessionState::AwaitingGuess,
            guesses_made: 0,
            auto_finish: false,
        };

        info!(
            "Session {} started: {} characters, attributed to {}",
            session.id,
            session.ciphertext.chars().count(),
            session.quote.author
        );
        session
    }

    /// End the session as soon as a guess completes the puzzle
    pub fn auto_finish(mut self, enabled: bool) -> Self {
        self.auto_finish = enabled;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn guesses(&self) -> &PlayerKey {
        &self.guesses
    }

    pub fn guesses_made(&self) -> u32 {
        self.guesses_made
    }

    /// Current decoded view and completion status
    pub fn progress(&self) -> Progress {
        progress::evaluate(&self.ciphertext, &self.key, &self.guesses)
    }

    /// Apply one line of player input
    pub fn handle_input(&mut self, line: &str) -> Turn {
        if self.state.is_over() {
            return Turn::Quit;
        }

        match Command::parse(line) {
            Ok(Command::Quit) => {
                self.state = SessionState::Quit;
                self.log_finish();
                Turn::Quit
            }
            Ok(Command::Guess { cipher, plain }) => {
                self.guesses.record_guess(cipher, plain);
                self.guesses_made += 1;
                debug!("Session {}: guess {} -> {}", self.id, cipher, plain);

                if self.auto_finish && self.progress().is_complete() {
                    self.state = SessionState::Solved;
                    self.log_finish();
                    Turn::Solved
                } else {
                    Turn::Guessed { cipher, plain }
                }
            }
            Err(e) => {
                debug!("Session {}: {}", self.id, e);
                Turn::Rejected(e)
            }
        }
    }

    fn log_finish(&self) {
        let elapsed = Utc::now() - self.started_at;
        info!(
            "Session {} finished ({:?}, solved: {}) after {} guesses in {}s",
            self.id,
            self.state,
            self.progress().is_complete(),
            self.guesses_made,
            elapsed.num_seconds()
        );
        trace!(
            "Session {} answer: {}",
            self.id,
            cipher::decrypt(&self.ciphertext, &self.key.inverse())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quote(body: &str) -> Quote {
        Quote {
            body: body.to_string(),
            author: "AUTHOR".to_string(),
        }
    }

    /// H->X, I->Y, and the displaced X, Y take H and I's places
    fn hi_key() -> EncryptionKey {
        EncryptionKey::from_letters("ABCDEFGXYJKLMNOPQRSTUVWHIZ").unwrap()
    }

    #[test]
    fn new_session_awaits_first_guess() {
        let session = Session::with_key(quote("HI"), hi_key());
        assert_eq!(session.state(), SessionState::AwaitingGuess);
        assert_eq!(session.ciphertext(), "XY");
        assert_eq!(session.progress().display, "__");
        assert_eq!(session.guesses().guessed_count(), 0);
    }

    #[test]
    fn guesses_solve_the_puzzle() {
        let mut session = Session::with_key(quote("HI"), hi_key());
        assert_eq!(session.handle_input("XH\n"), Turn::Guessed {
            cipher: Letter::from_char('X').unwrap(),
            plain: Letter::from_char('H').unwrap(),
        });
        assert_eq!(session.progress().display, "H_");

        session.handle_input("yi\n");
        let progress = session.progress();
        assert_eq!(progress.display, "HI");
        assert!(progress.is_complete());
        // Solving alone does not end the session.
        assert_eq!(session.state(), SessionState::AwaitingGuess);
    }

    #[test]
    fn quit_and_empty_line_end_the_session() {
        for line in ["quit", "quit\n", "\n"] {
            let mut session = Session::with_key(quote("HI"), hi_key());
            session.handle_input("XH\n");
            assert_eq!(session.handle_input(line), Turn::Quit);
            assert_eq!(session.state(), SessionState::Quit);
        }
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let mut session = Session::with_key(quote("HI"), hi_key());
        session.handle_input("XH\n");
        let before = session.guesses().clone();

        let turn = session.handle_input("123\n");
        assert!(matches!(turn, Turn::Rejected(GameError::InvalidGuessFormat(_))));
        assert_eq!(session.guesses(), &before);
        assert_eq!(session.guesses_made(), 1);
        assert_eq!(session.state(), SessionState::AwaitingGuess);
    }

    #[test]
    fn auto_finish_ends_on_completion() {
        let mut session = Session::with_key(quote("HI"), hi_key()).auto_finish(true);
        assert!(matches!(session.handle_input("XH\n"), Turn::Guessed { .. }));
        assert_eq!(session.handle_input("YI\n"), Turn::Solved);
        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(session.handle_input("AB\n"), Turn::Quit);
    }

    #[test]
    fn wrong_guess_does_not_auto_finish() {
        let mut session = Session::with_key(quote("HI"), hi_key()).auto_finish(true);
        session.handle_input("XH\n");
        assert!(matches!(session.handle_input("YQ\n"), Turn::Guessed { .. }));
        assert_eq!(session.state(), SessionState::AwaitingGuess);
    }

    #[test]
    fn started_sessions_encrypt_the_quote() {
        let mut rng = StdRng::seed_from_u64(21);
        let session = Session::start(quote("Hello, World!\n"), &mut rng);
        let cipher = session.ciphertext();
        assert_eq!(cipher.chars().count(), "Hello, World!\n".chars().count());
        assert!(cipher.ends_with("!\n"));
        assert_eq!(cipher.chars().nth(5), Some(','));
    }
}
