use chrono::NaiveDate;
use crosswordle_core::{LookupError, PuzzleSource, Word, WordLookup};
use crosswordle_providers::{ProviderError, RemoteConfig, RemoteDictionary, RemotePuzzleStore};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PUZZLE_JSON: &str = r#"{
    "id": "daily-2025-03-14",
    "date": "2025-03-14",
    "mainWord": { "word": "APPLE", "row": 2, "col": 0, "length": 5 },
    "crossers": [{
        "id": "crosser-1", "word": "RIPE", "clue": "Ready to eat",
        "direction": "down", "startRow": 0, "startCol": 1, "intersectionIndex": 2
    }],
    "gridSize": { "rows": 5, "cols": 5 },
    "theme": "Orchard",
    "themeHint": "Grows on trees"
}"#;

/// Canned responses keyed by request path.
fn route(path: &str) -> (u16, &'static str) {
    match path {
        "/words/APPLE" => (200, "{}"),
        "/words/BROKE" => (500, "{}"),
        "/words/SLEEP" => (0, ""),
        "/puzzles/2025-03-14" => (200, PUZZLE_JSON),
        "/puzzles/2025-03-15" => (200, "not json"),
        "/puzzles/2025-03-16" => (503, "{}"),
        _ => (404, "{}"),
    }
}

/// Serves [`route`] on a local port and returns its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = route(&path);
                if status == 0 {
                    // never answer, so the client times out
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    return;
                }
                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[tokio::test]
async fn test_remote_dictionary_answers() {
    let base = spawn_server().await;
    let config = RemoteConfig::new(base)
        .unwrap()
        .with_timeout(Duration::from_millis(500));
    let dictionary = RemoteDictionary::new(config).unwrap();

    assert_eq!(dictionary.is_valid_word(&word("APPLE")).await, Ok(true));
    assert_eq!(dictionary.is_valid_word(&word("ZZZZZ")).await, Ok(false));
}

#[tokio::test]
async fn test_remote_dictionary_failures_are_unavailable() {
    let base = spawn_server().await;
    let config = RemoteConfig::new(base)
        .unwrap()
        .with_timeout(Duration::from_millis(300));
    let dictionary = RemoteDictionary::new(config).unwrap();

    // a server error is not a "no"
    assert!(matches!(
        dictionary.is_valid_word(&word("BROKE")).await,
        Err(LookupError::Unavailable(_))
    ));
    // neither is a timeout
    assert!(matches!(
        dictionary.is_valid_word(&word("SLEEP")).await,
        Err(LookupError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_remote_dictionary_unreachable() {
    // bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = RemoteConfig::new(format!("http://{}", addr)).unwrap();
    let dictionary = RemoteDictionary::new(config).unwrap();
    assert!(matches!(
        dictionary.is_valid_word(&word("APPLE")).await,
        Err(LookupError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_remote_store_fetches_puzzle() {
    let base = spawn_server().await;
    let store = RemotePuzzleStore::new(RemoteConfig::new(base).unwrap()).unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    let puzzle = store.fetch_puzzle(date).await.unwrap();
    assert_eq!(puzzle.id, "daily-2025-03-14");
    assert_eq!(puzzle.date, date);
    assert!(puzzle.validate().is_ok());
}

#[tokio::test]
async fn test_remote_store_errors() {
    let base = spawn_server().await;
    let store = RemotePuzzleStore::new(RemoteConfig::new(base).unwrap()).unwrap();

    let missing = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert!(matches!(
        store.download(missing).await,
        Err(ProviderError::NotFound(d)) if d == missing
    ));

    let garbled = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    assert!(matches!(
        store.download(garbled).await,
        Err(ProviderError::SerdeParseError(_))
    ));

    let down = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
    assert!(matches!(
        store.download(down).await,
        Err(ProviderError::Status { status: 503, .. })
    ));
}
