use chrono::NaiveDate;
use clap::Parser;
use std::io::IsTerminal;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Daily word puzzle: guess the main word, unlock the crossers.
#[derive(Debug, Default, Parser)]
#[command(name = "crosswordle", version, about)]
pub struct Args {
    /// Puzzle date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Play a puzzle JSON file instead of the archive
    #[arg(long)]
    pub puzzle: Option<PathBuf>,

    /// Word list used to accept guesses (.txt, .csv or .json)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Base URL of the remote puzzle service
    #[arg(long, env = "CROSSWORDLE_API_URL")]
    pub remote: Option<String>,

    /// Number of guesses allowed
    #[arg(long)]
    pub max_attempts: Option<NonZeroUsize>,

    /// Ignore any saved progress for this puzzle
    #[arg(long)]
    pub fresh: bool,

    /// Read guesses line by line instead of opening the full-screen view
    #[arg(long)]
    pub plain: bool,

    /// Config file, defaults to ~/.crosswordle/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Full-screen view unless `--plain` was given or stdin is not a terminal.
    pub fn full_screen(&self) -> bool {
        !self.plain && std::io::stdin().is_terminal()
    }
}
