//! The quote corpus
//!
//! A corpus file holds records of one or more body lines, an attribution
//! line starting with `--`, and a blank line between records:
//!
//! ```text
//! THE ONLY THING WE HAVE TO FEAR
//! IS FEAR ITSELF.
//! --FRANKLIN D. ROOSEVELT
//!
//! HI
//! --AUTHOR
//! ```

use crate::GameError;
use log::{debug, info};
use rand::{Rng, RngCore};
use std::fs;
use std::path::{Path, PathBuf};

/// One quote from the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Puzzle text, including the line terminators of each body line
    pub body: String,
    /// Attribution, without the leading `--`
    pub author: String,
}

/// All quotes loaded from a corpus, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    /// Parse corpus text into quotes
    ///
    /// A record closes at a blank line once it has both a body and an
    /// attribution; blank lines before that are ignored. Incomplete records
    /// at end of input are dropped.
    pub fn parse(text: &str) -> Self {
        let mut quotes = Vec::new();
        let mut body = String::new();
        let mut author: Option<String> = None;

        for line in text.split_inclusive('\n') {
            let content = line.trim_end_matches(['\r', '\n']);
            if content.trim().is_empty() {
                if !body.is_empty() {
                    if let Some(author) = author.take() {
                        quotes.push(Quote {
                            body: std::mem::take(&mut body),
                            author,
                        });
                    }
                }
            } else if let Some(attribution) = content.strip_prefix("--") {
                author = Some(attribution.trim().to_string());
            } else {
                body.push_str(line);
            }
        }

        if !body.is_empty() {
            if let Some(author) = author {
                quotes.push(Quote { body, author });
            }
        }

        Self { quotes }
    }

    /// Read and parse a corpus file
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path).map_err(|e| {
            GameError::CorpusUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;

        let book = Self::parse(&text);
        if book.is_empty() {
            return Err(GameError::CorpusUnavailable(format!(
                "{} contains no quotes",
                path.display()
            )));
        }

        info!("Loaded {} quotes from {}", book.len(), path.display());
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Pick a quote uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Quote> {
        if self.quotes.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.quotes.len());
        debug!("Selected quote {} of {}", index + 1, self.quotes.len());
        self.quotes.get(index)
    }
}

/// Source of puzzle quotes
pub trait QuoteProvider {
    /// A random quote, or `CorpusUnavailable` if there is nothing to draw from
    fn random_quote(&mut self, rng: &mut dyn RngCore) -> Result<Quote, GameError>;
}

impl QuoteProvider for QuoteBook {
    fn random_quote(&mut self, rng: &mut dyn RngCore) -> Result<Quote, GameError> {
        self.choose(rng)
            .cloned()
            .ok_or_else(|| GameError::CorpusUnavailable("no quotes loaded".to_string()))
    }
}

/// Corpus file that is read on first use and kept for the process lifetime
#[derive(Debug)]
pub struct FileQuotes {
    path: PathBuf,
    book: Option<QuoteBook>,
}

impl FileQuotes {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            book: None,
        }
    }

    /// Load the corpus now if it has not been loaded yet
    pub fn ensure_loaded(&mut self) -> Result<&QuoteBook, GameError> {
        if self.book.is_none() {
            self.book = Some(QuoteBook::load(&self.path)?);
        }
        self.book
            .as_ref()
            .ok_or_else(|| GameError::CorpusUnavailable("corpus not loaded".to_string()))
    }
}

impl QuoteProvider for FileQuotes {
    fn random_quote(&mut self, rng: &mut dyn RngCore) -> Result<Quote, GameError> {
        let book = self.ensure_loaded()?;
        book.choose(rng)
            .cloned()
            .ok_or_else(|| GameError::CorpusUnavailable("no quotes loaded".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    const CORPUS: &str = "THE ONLY THING WE HAVE TO FEAR\n\
                          IS FEAR ITSELF.\n\
                          --FRANKLIN D. ROOSEVELT\n\
                          \n\
                          HI\n\
                          --AUTHOR\n";

    #[test]
    fn parses_multi_line_records() {
        let book = QuoteBook::parse(CORPUS);
        assert_eq!(book.len(), 2);
        assert_eq!(
            book.quotes()[0].body,
            "THE ONLY THING WE HAVE TO FEAR\nIS FEAR ITSELF.\n"
        );
        assert_eq!(book.quotes()[0].author, "FRANKLIN D. ROOSEVELT");
        assert_eq!(book.quotes()[1].body, "HI\n");
        assert_eq!(book.quotes()[1].author, "AUTHOR");
    }

    #[test]
    fn extra_blank_lines_are_ignored() {
        let book = QuoteBook::parse("\n\nA\n--X\n\n\n\nB\n--Y\n\n");
        let bodies: Vec<_> = book.quotes().iter().map(|q| q.body.as_str()).collect();
        assert_eq!(bodies, vec!["A\n", "B\n"]);
    }

    #[test]
    fn body_runs_on_until_attributed() {
        let book = QuoteBook::parse("ORPHAN LINE\n\nKEPT\n--SOMEONE\n");
        assert_eq!(book.len(), 1);
        assert_eq!(book.quotes()[0].body, "ORPHAN LINE\nKEPT\n");
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let book = QuoteBook::parse("HELLO\r\n--ME\r\n\r\nBYE\n--YOU");
        assert_eq!(book.len(), 2);
        assert_eq!(book.quotes()[0].author, "ME");
        assert_eq!(book.quotes()[1].author, "YOU");
    }

    #[test]
    fn empty_book_has_no_quote() {
        let mut book = QuoteBook::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            book.random_quote(&mut rng),
            Err(GameError::CorpusUnavailable(_))
        ));
    }

    #[test]
    fn random_quote_comes_from_the_book() {
        let mut book = QuoteBook::parse(CORPUS);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let quote = book.random_quote(&mut rng).unwrap();
            assert!(book.quotes().contains(&quote));
        }
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut quotes = FileQuotes::new(dir.path().join("nope.txt"));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            quotes.random_quote(&mut rng),
            Err(GameError::CorpusUnavailable(_))
        ));
    }

    #[test]
    fn file_is_loaded_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"HI\n--AUTHOR\n").unwrap();

        let mut quotes = FileQuotes::new(file.path());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(quotes.random_quote(&mut rng).unwrap().body, "HI\n");

        // Later changes to the file are not seen.
        std::fs::write(file.path(), "BYE\n--SOMEONE ELSE\n").unwrap();
        assert_eq!(quotes.random_quote(&mut rng).unwrap().body, "HI\n");
    }

    #[test]
    fn file_without_quotes_is_unavailable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut quotes = FileQuotes::new(file.path());
        assert!(matches!(
            quotes.ensure_loaded(),
            Err(GameError::CorpusUnavailable(_))
        ));
    }
}
