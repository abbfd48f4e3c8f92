//! Error types for the fiction engine.

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a game.
///
/// Out-of-menu input is not an error: the console re-prompts instead.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Navigation targeted a location with no registered scene.
    #[error("location not registered: {0}")]
    UnknownLocation(String),

    /// A key that names no location at all.
    #[error(
        "unknown location \"{key}\"{}",
        .suggestion.map(|s| format!(", did you mean \"{s}\"?")).unwrap_or_default()
    )]
    UnknownKey {
        /// The key as given.
        key: String,
        /// The closest known key, if any is close enough.
        suggestion: Option<&'static str>,
    },

    /// Input ended (end of stream or interrupt); the player is leaving.
    #[error("input closed")]
    Interrupted,

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A menu was asked with no options to choose from.
    #[error("menu has no options")]
    EmptyMenu,
}
