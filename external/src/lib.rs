mod dictionary;
pub use dictionary::{Dictionary, DictionaryFormat};

mod error;
pub use error::ExternalError;

mod archive;
pub use archive::PuzzleArchive;

mod save_file;
pub use save_file::{SaveFile, SAVE_VERSION};
