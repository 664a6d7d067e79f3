//! Main application loop

use crate::data::QuoteProvider;
use crate::game::{Session, Turn};
use crate::tui::{Terminal, Tone};
use crate::Result;
use anyhow::Context;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const GUESS_PROMPT: &str = "\nEnter a letter and its replacement, or quit to end program: ";
pub const INVALID_INPUT: &str = "\nInvalid input. Please try again.\n";
pub const NEW_GAME_PROMPT: &str = "\nNew Game?(y/n): ";
pub const GOODBYE: &str = "all done.\n";

/// Application state
pub struct App<T, P> {
    pub terminal: T,
    pub quotes: P,
    pub auto_finish: bool,
    rng: StdRng,
    sessions_played: u32,
}

impl<T: Terminal, P: QuoteProvider> App<T, P> {
    /// New app with its random source seeded from `seed`
    pub fn new(terminal: T, quotes: P, seed: u64) -> Self {
        debug!("Seeding RNG with {}", seed);
        Self {
            terminal,
            quotes,
            auto_finish: false,
            rng: StdRng::seed_from_u64(seed),
            sessions_played: 0,
        }
    }

    pub fn auto_finish(mut self, enabled: bool) -> Self {
        self.auto_finish = enabled;
        self
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    /// Play puzzles until the player declines a new game
    pub fn run(&mut self) -> Result<()> {
        loop {
            let quote = self.quotes.random_quote(&mut self.rng)?;
            let mut session = Session::start(quote, &mut self.rng).auto_finish(self.auto_finish);
            self.play(&mut session)?;
            self.terminal.display(GOODBYE)?;

            self.terminal.display_styled(NEW_GAME_PROMPT, Tone::Prompt)?;
            let answer = self.terminal.read_line()?;
            if !answer.is_some_and(|line| line.starts_with('y')) {
                break;
            }
        }

        info!("Exiting after {} puzzles", self.sessions_played);
        Ok(())
    }

    /// Run one session's turn loop until it is over
    pub fn play(&mut self, session: &mut Session) -> Result<()> {
        self.sessions_played += 1;

        while !session.state().is_over() {
            self.show_world(session)?;
            self.terminal.display_styled(GUESS_PROMPT, Tone::Prompt)?;

            // End of input counts as an empty line.
            let line = self
                .terminal
                .read_line()
                .context("Failed to read player input")?
                .unwrap_or_default();

            match session.handle_input(&line) {
                Turn::Rejected(_) => {
                    self.terminal.display_styled(INVALID_INPUT, Tone::Alert)?;
                }
                Turn::Solved => {
                    self.show_world(session)?;
                    let banner = format!("\nSolved! Quote by {}\n", session.quote().author);
                    self.terminal.display_styled(&banner, Tone::Success)?;
                }
                Turn::Guessed { .. } | Turn::Quit => {}
            }
        }

        Ok(())
    }

    /// Print the ciphertext and the player's decoding of it
    fn show_world(&mut self, session: &Session) -> Result<()> {
        let progress = session.progress();

        self.terminal.display("Encrypted: ")?;
        self.terminal
            .display_styled(session.ciphertext().trim_end_matches('\n'), Tone::Cipher)?;
        self.terminal.display("\nDecrypted: ")?;
        self.terminal
            .display_styled(progress.display.trim_end_matches('\n'), Tone::Decoded)?;
        self.terminal.display("\n")?;
        Ok(())
    }
}
