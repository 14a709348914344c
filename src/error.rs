//! Error types for the breakpoint model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A location or breakpoint record broke its shape contract. Always a
    /// caller bug, never retried.
    #[error("Invariant violation: {message}")]
    InvariantViolation { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Assertion primitive: fails with an [`Error::InvariantViolation`] carrying
/// `message` when `condition` does not hold.
pub fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        return Ok(());
    }
    tracing::error!("{}", message);
    Err(Error::InvariantViolation {
        message: message.to_string(),
    })
}

impl Error {
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::InvariantViolation { .. })
    }
}
