use thiserror::Error;

/// Unified error type for release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not determine start reference: {0}")]
    Resolution(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a reference resolution error with context
    pub fn resolution(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Resolution(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Output(msg.into())
    }
}
