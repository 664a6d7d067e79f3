//! Cryptogram
//!
//! Decode a famous quote hidden behind a random substitution cipher.

use clap::Parser;
use cryptogram::tui::{color_enabled, App, Console};
use cryptogram::{exit_status, FileQuotes};
use log::{debug, LevelFilter};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

/// Terminal cryptogram puzzle.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Quote corpus: body lines, a `--` attribution line, blank line between quotes.
    #[arg(short, long, default_value = "quotes.txt")]
    quotes: PathBuf,

    /// Seed for puzzle selection and keys. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// End a puzzle as soon as it is correctly decoded.
    #[arg(long)]
    auto_finish: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
    debug!("Command line options: {:?}", opts);

    let seed = opts
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64);

    // Load up front so a bad corpus fails before the first prompt.
    let mut quotes = FileQuotes::new(opts.quotes.clone());
    if let Err(e) = quotes.ensure_loaded() {
        let e = anyhow::Error::from(e);
        debug!("Corpus load failed: {:?}", e);
        eprintln!("error opening file: {}", e);
        return ExitCode::from(exit_status(&e));
    }

    let colored = color_enabled(!opts.no_color, io::stdout().is_terminal());
    let mut app = App::new(Console::stdio(colored), quotes, seed).auto_finish(opts.auto_finish);
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Game ended with error: {:?}", e);
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_status(&e))
        }
    }
}
