//! Error types for docfixture
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Result type alias for docfixture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during docfixture operations
#[derive(Error, Debug)]
pub enum Error {
    /// Two derived keys have no defined ordering (e.g. `NaN` against a number)
    #[error("derived keys are incomparable")]
    Incomparable,

    /// Arithmetic overflow in a checked fixture
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// SQLite driver error
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Fixture name not recognized
    #[error("unknown fixture: {0}")]
    UnknownFixture(String),

    /// Language name not recognized
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
