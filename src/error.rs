//! Error types for the nudge core.

/// Top-level error type for the reminder engine and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum NudgeError {
    /// Persistent store error (serialization, state file access).
    #[error("store error: {0}")]
    Store(String),

    /// Settings / configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Translation catalog error.
    #[error("i18n error: {0}")]
    I18n(String),

    /// Channel send/receive error.
    #[error("channel error: {0}")]
    Channel(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, NudgeError>;
