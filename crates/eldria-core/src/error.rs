//! Error types for core state.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when interpreting core identifiers or state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The string does not name a known quest.
    #[error("unknown quest: \"{0}\"")]
    UnknownQuest(String),

    /// Stored state that breaks a player invariant.
    #[error("invalid player state: {0}")]
    InvalidState(String),
}
