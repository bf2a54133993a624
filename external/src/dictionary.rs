use crate::error::ExternalError;
use crosswordle_core::{LookupError, Word, WordLookup};
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    Text,
    Csv,
    Json,
}

impl DictionaryFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(DictionaryFormat::Text),
            "csv" => Some(DictionaryFormat::Csv),
            "json" => Some(DictionaryFormat::Json),
            _ => None,
        }
    }
}

/// CSV row; only the `word` column is read, other columns are ignored.
#[derive(Debug, Deserialize)]
struct WordRecord {
    word: String,
}

/// In-memory set of admissible guesses.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub name: String,
    words: HashSet<Word>,
}

impl Dictionary {
    pub fn new(name: String) -> Self {
        Self {
            name,
            words: HashSet::new(),
        }
    }

    /// Loads a word list, picking the format from the file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let format = DictionaryFormat::from_extension(extension).ok_or_else(|| {
            ExternalError::InvalidFormat {
                expected: "txt, csv or json".to_string(),
                actual: extension.to_string(),
            }
        })?;

        let file = File::open(path)?;
        let mut dictionary = match format {
            DictionaryFormat::Text => Self::from_text(BufReader::new(file))?,
            DictionaryFormat::Csv => Self::from_csv(file)?,
            DictionaryFormat::Json => Self::from_json(file)?,
        };
        dictionary.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Unknown")
            .to_string();

        info!(name = %dictionary.name, words = dictionary.len(), "Loaded dictionary");
        Ok(dictionary)
    }

    /// One word per line. Blank lines and lines starting with `#` are skipped.
    pub fn from_text<R: BufRead>(reader: R) -> Result<Self, ExternalError> {
        let mut dictionary = Self::default();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            dictionary.insert_raw(line, i + 1)?;
        }
        Ok(dictionary)
    }

    /// CSV with a `word` header column.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, ExternalError> {
        let mut dictionary = Self::default();
        let mut reader = csv::Reader::from_reader(reader);
        for (i, result) in reader.deserialize().enumerate() {
            let record: WordRecord = result?;
            // +2: header row and 1-based numbering
            dictionary.insert_raw(&record.word, i + 2)?;
        }
        Ok(dictionary)
    }

    /// JSON array of strings.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, ExternalError> {
        let raw: Vec<String> = serde_json::from_reader(reader)?;
        let mut dictionary = Self::default();
        for (i, word) in raw.iter().enumerate() {
            dictionary.insert_raw(word, i + 1)?;
        }
        Ok(dictionary)
    }

    fn insert_raw(&mut self, raw: &str, line: usize) -> Result<(), ExternalError> {
        let word = Word::parse(raw)
            .map_err(|e| ExternalError::InvalidWordList(format!("entry {}: {:?}: {}", line, raw, e)))?;
        self.words.insert(word);
        Ok(())
    }

    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words_of_length(&self, length: usize) -> usize {
        self.words.iter().filter(|w| w.len() == length).count()
    }

    pub fn merge(&mut self, other: Dictionary) {
        self.words.extend(other.words);
    }
}

impl WordLookup for Dictionary {
    async fn is_valid_word(&self, word: &Word) -> Result<bool, LookupError> {
        Ok(self.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn test_from_text_skips_comments() {
        let text = "# five letter words\napple\n\n  Crane \nSLATE\n";
        let dictionary = Dictionary::from_text(text.as_bytes()).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains(&word("APPLE")));
        assert!(dictionary.contains(&word("crane")));
        assert!(!dictionary.contains(&word("PEACH")));
    }

    #[test]
    fn test_from_text_rejects_bad_entries() {
        let err = Dictionary::from_text("apple\nc4t\n".as_bytes()).unwrap_err();
        match err {
            ExternalError::InvalidWordList(msg) => assert!(msg.contains("entry 2")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_from_csv_reads_word_column() {
        let csv = "word,clue\nripe,Ready to eat\nelk,Large deer\n";
        let dictionary = Dictionary::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains(&word("RIPE")));
        assert_eq!(dictionary.words_of_length(3), 1);
    }

    #[test]
    fn test_from_json() {
        let dictionary = Dictionary::from_json(r#"["apple", "APPLE", "pear"]"#.as_bytes()).unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fives.txt");
        std::fs::write(&path, "apple\ncrane\n").unwrap();

        let dictionary = Dictionary::load(&path).unwrap();
        assert_eq!(dictionary.name, "fives");
        assert_eq!(dictionary.words_of_length(5), 2);

        let bad = dir.path().join("fives.xml");
        std::fs::write(&bad, "").unwrap();
        assert!(matches!(
            Dictionary::load(&bad),
            Err(ExternalError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_merge() {
        let mut a = Dictionary::from_text("apple".as_bytes()).unwrap();
        let b = Dictionary::from_text("crane\napple".as_bytes()).unwrap();
        a.merge(b);
        assert_eq!(a.len(), 2);
        assert!(a.insert(word("SLATE")));
        assert!(!a.insert(word("SLATE")));
    }

    #[tokio::test]
    async fn test_word_lookup() {
        let dictionary = Dictionary::from_text("apple".as_bytes()).unwrap();
        assert_eq!(dictionary.is_valid_word(&word("APPLE")).await, Ok(true));
        assert_eq!(dictionary.is_valid_word(&word("ZZZZZ")).await, Ok(false));
    }
}
