//! Tracing setup.
//!
//! The full-screen view owns the terminal, so its logs go to
//! `~/.crosswordle/crosswordle.log`; line mode logs to stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "crosswordle.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Creates `dir` if needed and truncates the log file inside it.
pub fn open_log_file(dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(dir)?;
    File::create(dir.join(LOG_FILE_NAME))
}

/// Log file inside `log_dir` when given, stderr otherwise.
pub fn make_writer(log_dir: Option<&Path>) -> std::io::Result<BoxMakeWriter> {
    Ok(match log_dir {
        Some(dir) => BoxMakeWriter::new(Arc::new(open_log_file(dir)?)),
        None => BoxMakeWriter::new(std::io::stderr),
    })
}

/// Installs the global subscriber.
pub fn init(log_dir: Option<&Path>) -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(make_writer(log_dir)?)
        .with_ansi(log_dir.is_none())
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("app");

        open_log_file(&nested).unwrap();
        assert!(nested.join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn test_log_file_receives_events() {
        let dir = tempfile::tempdir().unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("warn"))
            .with_writer(make_writer(Some(dir.path())).unwrap())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("Dictionary lookup failed");
            tracing::info!("filtered out");
        });

        let contents = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(contents.contains("Dictionary lookup failed"));
        assert!(!contents.contains("filtered out"));
        assert!(!contents.contains('\u{1b}'));
    }
}
