mod app;
pub use app::{build_lookup, run, Lookup};

pub mod args;
pub mod config;
pub mod logging;
pub mod play;
pub mod render;
pub mod tui;
