pub mod config;
pub mod dictionary;
pub mod store;
pub mod util;

mod errors;
pub use errors::ProviderError;

pub use config::{RemoteConfig, API_URL_ENV};
pub use dictionary::RemoteDictionary;
pub use store::RemotePuzzleStore;
