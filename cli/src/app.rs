use crate::args::Args;
use crate::config::{self, Config};
use crate::play;
use crate::tui;
use color_eyre::eyre::{eyre, Result, WrapErr};
use crosswordle_core::{
    GameSession, LookupError, PuzzleData, PuzzleSource, ValidatedPuzzle, Word, WordLookup,
};
use crosswordle_external::{Dictionary, PuzzleArchive, SaveFile};
use crosswordle_providers::{RemoteConfig, RemoteDictionary, RemotePuzzleStore};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};

/// Dictionary handle picked once at start-up.
pub enum Lookup {
    Local(Dictionary),
    Remote(RemoteDictionary),
}

impl WordLookup for Lookup {
    async fn is_valid_word(&self, word: &Word) -> Result<bool, LookupError> {
        match self {
            Lookup::Local(dictionary) => dictionary.is_valid_word(word).await,
            Lookup::Remote(dictionary) => dictionary.is_valid_word(word).await,
        }
    }
}

/// A local word list wins over the remote service when both are configured.
pub fn build_lookup(config: &Config) -> Result<Lookup> {
    if let Some(path) = &config.dictionary_path {
        let dictionary = Dictionary::load(path)
            .wrap_err_with(|| format!("loading dictionary {}", path.display()))?;
        return Ok(Lookup::Local(dictionary));
    }
    if let Some(url) = &config.remote_url {
        let remote = RemoteConfig::new(url.as_str())?.with_timeout(config.request_timeout());
        return Ok(Lookup::Remote(RemoteDictionary::new(remote)?));
    }
    Err(eyre!(
        "no dictionary configured: pass --dictionary, --remote or set dictionary_path in the config"
    ))
}

async fn fetch_puzzle(args: &Args, config: &Config) -> Result<PuzzleData> {
    if let Some(path) = &args.puzzle {
        return PuzzleArchive::load_file(path)
            .wrap_err_with(|| format!("loading puzzle {}", path.display()));
    }

    let date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    match &config.remote_url {
        Some(url) => {
            let remote = RemoteConfig::new(url.as_str())?.with_timeout(config.request_timeout());
            Ok(RemotePuzzleStore::new(remote)?.fetch_puzzle(date).await?)
        }
        None => Ok(PuzzleArchive::new(config.puzzle_dir()?).fetch_puzzle(date).await?),
    }
}

/// Resumes the saved game for `puzzle` from `save_dir`.
///
/// A save that cannot be read or replayed (another puzzle sharing the file
/// name, a lowered attempt limit) is logged and a fresh session is started.
pub fn load_session(
    puzzle: Arc<ValidatedPuzzle>,
    max_attempts: NonZeroUsize,
    save_dir: &Path,
) -> GameSession {
    let save = match SaveFile::load(save_dir, puzzle.date(), puzzle.id()) {
        Ok(Some(save)) => save,
        Ok(None) => return GameSession::new(puzzle, max_attempts),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable save file");
            return GameSession::new(puzzle, max_attempts);
        }
    };

    match GameSession::resume(puzzle.clone(), max_attempts, &save.snapshot()) {
        Ok(session) => {
            info!(guesses = save.guesses.len(), "Resuming saved game");
            session
        }
        Err(e) => {
            warn!(error = %e, "Saved game does not fit this puzzle, starting over");
            GameSession::new(puzzle, max_attempts)
        }
    }
}

/// Loads everything, plays one session and saves progress.
pub async fn run(args: Args) -> Result<()> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };
    if !config_path.exists() && args.config.is_none() {
        // first run: leave a template behind for the user to edit
        if let Err(e) = config::save_config(&config_path, &Config::default()) {
            warn!(error = %e, "Could not write default config");
        }
    }
    let mut config = config::load_config(&config_path)
        .wrap_err_with(|| format!("reading config {}", config_path.display()))?;
    config.apply_args(&args);

    let lookup = build_lookup(&config)?;
    let puzzle: Arc<ValidatedPuzzle> = Arc::new(fetch_puzzle(&args, &config).await?.validate()?);

    let save_dir = config.save_dir()?;
    let date = puzzle.date();
    let mut session = if args.fresh {
        GameSession::new(puzzle.clone(), config.max_attempts)
    } else {
        load_session(puzzle.clone(), config.max_attempts, &save_dir)
    };

    let mut stdout = std::io::stdout();
    let session = if !args.full_screen() {
        play::print_intro(&session, &mut stdout)?;
        let end = play::play(
            &mut session,
            &lookup,
            BufReader::new(tokio::io::stdin()),
            &mut stdout,
        )
        .await?;
        info!(?end, "Line mode finished");
        session
    } else {
        let terminal = ratatui::init();
        let result = tui::App::new(session, lookup).run(terminal).await;
        ratatui::restore();
        result?
    };
    if session.phase().is_terminal() {
        play::print_summary(&session, &mut stdout)?;
    }

    let path = SaveFile::new(date, &session.snapshot()).save(&save_dir)?;
    info!(path = %path.display(), phase = ?session.phase(), "Progress saved");
    Ok(())
}
