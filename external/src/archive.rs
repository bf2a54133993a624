use crate::error::ExternalError;
use chrono::NaiveDate;
use crosswordle_core::{PuzzleData, PuzzleSource};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Directory of daily puzzles stored as `YYYY-MM-DD.json`.
#[derive(Debug, Clone)]
pub struct PuzzleArchive {
    dir: PathBuf,
}

impl PuzzleArchive {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", date.format(DATE_FORMAT)))
    }

    /// Reads a single puzzle file from anywhere on disk.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<PuzzleData, ExternalError> {
        let file = File::open(path)?;
        let puzzle: PuzzleData = serde_json::from_reader(BufReader::new(file))?;
        Ok(puzzle)
    }

    pub fn load(&self, date: NaiveDate) -> Result<PuzzleData, ExternalError> {
        let path = self.path_for(date);
        if !path.exists() {
            return Err(ExternalError::PuzzleNotFound(date));
        }
        debug!(path = %path.display(), "Loading puzzle from archive");

        let puzzle = Self::load_file(&path)?;
        if puzzle.date != date {
            return Err(ExternalError::InvalidFormat {
                expected: format!("puzzle dated {}", date),
                actual: format!("puzzle dated {}", puzzle.date),
            });
        }
        Ok(puzzle)
    }

    /// Writes `puzzle` under its own date, replacing any previous file.
    pub fn save(&self, puzzle: &PuzzleData) -> Result<PathBuf, ExternalError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(puzzle.date);
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, puzzle)?;
        Ok(path)
    }

    /// Dates with a stored puzzle, oldest first. A missing directory is empty.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, ExternalError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let date = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok());
            if let Some(date) = date {
                dates.push(date);
            }
        }
        dates.sort();
        Ok(dates)
    }
}

impl PuzzleSource for PuzzleArchive {
    type Error = ExternalError;

    async fn fetch_puzzle(&self, date: NaiveDate) -> Result<PuzzleData, ExternalError> {
        self.load(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswordle_core::{CrosserSpec, GridSize, MainWordSpec};

    fn puzzle(date: NaiveDate) -> PuzzleData {
        PuzzleData {
            id: format!("daily-{}", date),
            date,
            main_word: MainWordSpec::new("APPLE", 2, 0),
            crossers: vec![CrosserSpec::new("crosser-1", "RIPE", "Ready to eat", 0, 1, 2)],
            grid_size: GridSize { rows: 5, cols: 5 },
            theme: "Orchard".to_string(),
            theme_hint: "Grows on trees".to_string(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let archive = PuzzleArchive::new(dir.path().join("puzzles"));

        let path = archive.save(&puzzle(day(14))).unwrap();
        assert!(path.ends_with("2025-03-14.json"));
        assert_eq!(archive.load(day(14)).unwrap(), puzzle(day(14)));
    }

    #[test]
    fn test_missing_date() {
        let dir = tempfile::tempdir().unwrap();
        let archive = PuzzleArchive::new(dir.path());
        assert!(matches!(
            archive.load(day(1)),
            Err(ExternalError::PuzzleNotFound(d)) if d == day(1)
        ));
    }

    #[test]
    fn test_misfiled_puzzle_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let archive = PuzzleArchive::new(dir.path());
        let path = archive.save(&puzzle(day(2))).unwrap();
        std::fs::rename(&path, archive.path_for(day(3))).unwrap();

        assert!(matches!(
            archive.load(day(3)),
            Err(ExternalError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_dates_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let archive = PuzzleArchive::new(dir.path());
        assert!(archive.dates().unwrap().is_empty());

        for d in [9, 3, 27] {
            archive.save(&puzzle(day(d))).unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::write(dir.path().join("draft.json"), "{}").unwrap();

        assert_eq!(archive.dates().unwrap(), vec![day(3), day(9), day(27)]);
    }

    #[tokio::test]
    async fn test_puzzle_source() {
        let dir = tempfile::tempdir().unwrap();
        let archive = PuzzleArchive::new(dir.path());
        archive.save(&puzzle(day(5))).unwrap();

        let fetched = archive.fetch_puzzle(day(5)).await.unwrap();
        assert!(fetched.validate().is_ok());
    }
}
