//! Full-screen terminal front-end.

use color_eyre::eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crosswordle_core::{GameError, GameSession, Phase, Word, WordLookup};

mod board;
pub use board::{board, BoardCell};

mod view;

/// Footer message after the last key press or guess.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Info(String),
    Error(String),
}

/// What the main loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit(Word),
    Quit,
}

pub struct App<L> {
    /// Session being played.
    pub session: GameSession,
    /// Letters typed for the next guess.
    pub input: String,
    pub status: Status,
    /// Is the application running?
    pub is_running: bool,
    lookup: L,
}

impl<L: WordLookup> App<L> {
    /// Construct a new instance of [`App`].
    pub fn new(session: GameSession, lookup: L) -> Self {
        Self {
            session,
            input: String::new(),
            status: Status::Idle,
            is_running: false,
            lookup,
        }
    }

    /// Run the application's main loop, handing the session back when the player leaves.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<GameSession> {
        use futures::StreamExt;

        self.is_running = true;
        let mut event_stream = EventStream::new();

        while self.is_running {
            terminal.draw(|frame| view::draw(&self, frame))?;

            match event_stream.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let KeyAction::Submit(word) = self.handle_key(key) {
                        self.submit(word).await;
                    }
                }
                Some(Ok(_)) => {} // resize and mouse events just redraw
                Some(Err(e)) => return Err(e.into()),
                None => self.quit(),
            }
        }

        Ok(self.session)
    }

    /// Updates the input line and tells the caller whether a guess is ready.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        // application-wide CTRL+C handler
        if matches!(
            (key.modifiers, key.code),
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
        ) || key.code == KeyCode::Esc
        {
            self.quit();
            return KeyAction::Quit;
        }

        if self.session.phase().is_terminal() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('q')) {
                self.quit();
                return KeyAction::Quit;
            }
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input.len() < self.session.puzzle().word_length() {
                    self.input.push(c.to_ascii_uppercase());
                }
                self.status = Status::Idle;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.status = Status::Idle;
            }
            KeyCode::Enter => match Word::parse(&self.input) {
                Ok(word) => return KeyAction::Submit(word),
                Err(_) => self.status = Status::Error("Type a guess first".to_string()),
            },
            _ => {}
        }
        KeyAction::None
    }

    /// Plays `word` against the session and reports the result in the footer.
    pub async fn submit(&mut self, word: Word) {
        self.status = match self.session.submit_guess(&self.lookup, &word).await {
            Ok(outcome) => {
                self.input.clear();
                match outcome.phase {
                    Phase::Won => Status::Info("Solved! Press enter to exit.".to_string()),
                    Phase::Lost => Status::Info(format!(
                        "Out of guesses. The word was {}. Press enter to exit.",
                        self.session.puzzle().main_word()
                    )),
                    Phase::InProgress if !outcome.newly_revealed_crosser_ids.is_empty() => {
                        Status::Info("Crosser unlocked!".to_string())
                    }
                    Phase::InProgress => Status::Idle,
                }
            }
            Err(GameError::InvalidLength { expected, .. }) => {
                Status::Error(format!("Guesses must have {} letters", expected))
            }
            Err(GameError::NotARealWord(word)) => {
                Status::Error(format!("{} is not in the word list", word))
            }
            Err(e) => Status::Error(e.to_string()),
        };
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crosswordle_core::{CrosserSpec, GridSize, MainWordSpec, PuzzleData, DEFAULT_MAX_ATTEMPTS};
    use crosswordle_external::Dictionary;
    use std::sync::Arc;

    fn new_app() -> App<Dictionary> {
        let puzzle = PuzzleData {
            id: "daily".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            main_word: MainWordSpec::new("APPLE", 2, 0),
            crossers: vec![CrosserSpec::new("crosser-1", "RIPE", "Ready to eat", 0, 1, 2)],
            grid_size: GridSize { rows: 5, cols: 5 },
            theme: "Orchard".to_string(),
            theme_hint: String::new(),
        };
        let session = GameSession::new(Arc::new(puzzle.validate().unwrap()), DEFAULT_MAX_ATTEMPTS);
        let dictionary = Dictionary::from_text("apple\ncrane\nspoil\n".as_bytes()).unwrap();
        App::new(session, dictionary)
    }

    fn press(app: &mut App<Dictionary>, code: KeyCode) -> KeyAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_word(app: &mut App<Dictionary>, word: &str) -> KeyAction {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter)
    }

    #[test]
    fn test_typing_is_capped_and_uppercased() {
        let mut app = new_app();
        for c in "applesauce".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input, "APPLE");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.input, "APPL");
    }

    #[test]
    fn test_enter_without_input() {
        let mut app = new_app();
        assert_eq!(press(&mut app, KeyCode::Enter), KeyAction::None);
        assert!(matches!(app.status, Status::Error(_)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        app.is_running = true;
        let action = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, KeyAction::Quit);
        assert!(!app.is_running);

        // 'q' is an ordinary letter while playing
        let mut app = new_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::None);
        assert_eq!(app.input, "Q");
    }

    #[tokio::test]
    async fn test_submit_flow() {
        let mut app = new_app();

        let KeyAction::Submit(word) = type_word(&mut app, "zzzzz") else {
            panic!("expected a guess");
        };
        app.submit(word).await;
        assert_eq!(app.status, Status::Error("ZZZZZ is not in the word list".to_string()));
        // rejected input stays editable
        assert_eq!(app.input, "ZZZZZ");

        app.input.clear();
        let KeyAction::Submit(word) = type_word(&mut app, "pear") else {
            panic!("expected a guess");
        };
        app.submit(word).await;
        assert_eq!(app.status, Status::Error("Guesses must have 5 letters".to_string()));

        app.input.clear();
        let KeyAction::Submit(word) = type_word(&mut app, "spoil") else {
            panic!("expected a guess");
        };
        app.submit(word).await;
        assert_eq!(app.status, Status::Info("Crosser unlocked!".to_string()));
        assert!(app.input.is_empty());

        let KeyAction::Submit(word) = type_word(&mut app, "apple") else {
            panic!("expected a guess");
        };
        app.submit(word).await;
        assert_eq!(app.session.phase(), Phase::Won);

        // once over, letters are ignored and enter leaves
        assert_eq!(press(&mut app, KeyCode::Char('a')), KeyAction::None);
        assert_eq!(press(&mut app, KeyCode::Enter), KeyAction::Quit);
    }
}
