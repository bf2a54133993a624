//! Saved progress for a daily puzzle.
//!
//! Saves are written as `{date}_{puzzle-id}.json` inside a caller-chosen
//! directory and hold only the admitted guesses; the session is rebuilt by
//! replaying them.

use crate::error::ExternalError;
use chrono::NaiveDate;
use crosswordle_core::{SessionSnapshot, Word};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SAVE_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    /// Version for future compatibility.
    pub version: u8,
    pub puzzle_id: String,
    pub date: NaiveDate,
    pub guesses: Vec<Word>,
    /// RFC 3339 timestamp of the last write.
    pub saved_at: String,
}

/// `{date}_{puzzle-id-slug}.json`
fn generate_filename(date: NaiveDate, puzzle_id: &str) -> String {
    let slug: String = puzzle_id
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect();
    format!("{}_{}.json", date.format("%Y-%m-%d"), slug)
}

impl SaveFile {
    pub fn new(date: NaiveDate, snapshot: &SessionSnapshot) -> Self {
        Self {
            version: SAVE_VERSION,
            puzzle_id: snapshot.puzzle_id.clone(),
            date,
            guesses: snapshot.guesses.clone(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            puzzle_id: self.puzzle_id.clone(),
            guesses: self.guesses.clone(),
        }
    }

    pub fn path_in(dir: &Path, date: NaiveDate, puzzle_id: &str) -> PathBuf {
        dir.join(generate_filename(date, puzzle_id))
    }

    /// Writes the save, returning its path.
    pub fn save(&mut self, dir: &Path) -> Result<PathBuf, ExternalError> {
        std::fs::create_dir_all(dir)?;
        self.saved_at = chrono::Utc::now().to_rfc3339();

        let path = Self::path_in(dir, self.date, &self.puzzle_id);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Loads the save for a puzzle, `None` if there is none.
    pub fn load(dir: &Path, date: NaiveDate, puzzle_id: &str) -> Result<Option<Self>, ExternalError> {
        let path = Self::path_in(dir, date, puzzle_id);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        let save: SaveFile = serde_json::from_str(&contents)?;
        if save.version != SAVE_VERSION {
            return Err(ExternalError::InvalidFormat {
                expected: format!("save version {}", SAVE_VERSION),
                actual: format!("save version {}", save.version),
            });
        }
        Ok(Some(save))
    }

    /// Removes the save for a puzzle if present.
    pub fn delete(dir: &Path, date: NaiveDate, puzzle_id: &str) -> Result<(), ExternalError> {
        let path = Self::path_in(dir, date, puzzle_id);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            puzzle_id: "Daily 42".to_string(),
            guesses: vec![Word::parse("CRANE").unwrap(), Word::parse("SPOIL").unwrap()],
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
    }

    #[test]
    fn test_filename_slug() {
        assert_eq!(generate_filename(date(), "Daily 42"), "2025-01-30_daily-42.json");
        assert_eq!(generate_filename(date(), "a/b"), "2025-01-30_a-b.json");
    }

    #[test]
    fn test_save_load_delete() {
        let dir = tempfile::tempdir().unwrap();
        let saves = dir.path().join("saves");

        assert_eq!(SaveFile::load(&saves, date(), "Daily 42").unwrap(), None);

        let mut save = SaveFile::new(date(), &snapshot());
        let path = save.save(&saves).unwrap();
        assert!(path.exists());

        let loaded = SaveFile::load(&saves, date(), "Daily 42").unwrap().unwrap();
        assert_eq!(loaded.snapshot(), snapshot());
        assert_eq!(loaded.version, SAVE_VERSION);

        SaveFile::delete(&saves, date(), "Daily 42").unwrap();
        assert!(!path.exists());
        // deleting twice is fine
        SaveFile::delete(&saves, date(), "Daily 42").unwrap();
    }

    #[test]
    fn test_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let mut save = SaveFile::new(date(), &snapshot());
        save.version = 9;
        let json = serde_json::to_string(&save).unwrap();
        std::fs::write(SaveFile::path_in(dir.path(), date(), "Daily 42"), json).unwrap();

        assert!(matches!(
            SaveFile::load(dir.path(), date(), "Daily 42"),
            Err(ExternalError::InvalidFormat { .. })
        ));
    }
}
