//! Lovewave - animated ASCII-art greeting for the terminal
//!
//! Renders a rotating playlist of ASCII artworks with wave, bob and sparkle
//! effects and wipe transitions between artworks, driven by a fixed-interval
//! scheduler with a countdown. Artworks come from inline text, local files,
//! URLs, a manifest-driven directory or the built-in defaults.

pub mod animator;
pub mod config;
pub mod loader;
pub mod playlist;
pub mod scheduler;
pub mod tui;

pub use animator::{Animator, Canvas, RenderedFrame, WipeMode};
pub use loader::{ArtSource, LoadReport};
pub use playlist::{Artwork, Playlist};
pub use scheduler::{Scheduler, TickOutcome};

/// Result type for lovewave operations
pub type Result<T> = std::result::Result<T, LovewaveError>;

/// Errors that can occur while loading configuration or artwork sources.
/// The animation path itself is infallible.
#[derive(Debug, thiserror::Error)]
pub enum LovewaveError {
    #[error("Failed to fetch {0}")]
    Fetch(String),

    #[error("Manifest at {0} is not a JSON array of file names")]
    Manifest(String),

    #[error("Source {0} contained no frames")]
    EmptySource(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
