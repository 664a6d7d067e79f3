//! Terminal channel
//!
//! Line-based I/O for the game: write text, read one line at a time.

pub mod app;

pub use app::App;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, BufRead, Write};

/// Longest line kept from the player, counting the line terminator
///
/// The rest of a longer physical line is read and thrown away, so it is
/// never taken as the next input.
pub const MAX_LINE_CHARS: usize = 4;

/// How a piece of output should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Cipher,
    Decoded,
    Prompt,
    Alert,
    Success,
}

/// Color scheme for the game
pub struct Theme {
    pub cipher: Color,
    pub decoded: Color,
    pub prompt: Color,
    pub alert: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cipher: Color::Cyan,
            decoded: Color::White,
            prompt: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    pub fn color(&self, tone: Tone) -> Option<Color> {
        match tone {
            Tone::Plain => None,
            Tone::Cipher => Some(self.cipher),
            Tone::Decoded => Some(self.decoded),
            Tone::Prompt => Some(self.prompt),
            Tone::Alert => Some(self.alert),
            Tone::Success => Some(self.success),
        }
    }
}

/// Where the game shows text and reads the player's lines
pub trait Terminal {
    /// Show `text` as-is
    fn display(&mut self, text: &str) -> io::Result<()>;

    /// Show `text` styled for `tone`; plain unless the terminal has colors
    fn display_styled(&mut self, text: &str, _tone: Tone) -> io::Result<()> {
        self.display(text)
    }

    /// Block for the next line, terminator included
    ///
    /// Lines are capped at [`MAX_LINE_CHARS`]. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Colour only when asked for and writing to a real terminal
pub fn color_enabled(requested: bool, is_terminal: bool) -> bool {
    requested && is_terminal
}

/// Cut `line` to the input cap
pub fn cap_line(mut line: String) -> String {
    if let Some((index, _)) = line.char_indices().nth(MAX_LINE_CHARS) {
        line.truncate(index);
    }
    line
}

/// A terminal over any reader and writer, stdin/stdout by default
pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
    colored: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(colored: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), colored)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, colored: bool) -> Self {
        Self {
            input,
            output,
            theme: Theme::default(),
            colored,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn display(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn display_styled(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        match self.theme.color(tone).filter(|_| self.colored) {
            Some(color) => {
                queue!(self.output, SetForegroundColor(color))?;
                if tone == Tone::Alert || tone == Tone::Success {
                    queue!(self.output, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    self.output,
                    Print(text),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
                self.output.flush()
            }
            None => self.display(text),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(cap_line(line)))
    }
}
