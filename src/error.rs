//! Error types for corpus scrubbing and equalisation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for corpus-cleaner operations.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Invalid configuration (ratio out of range, empty character class, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A finished temporary file could not be moved over its target.
    #[error("Failed to replace {path}: {source}")]
    Persist {
        /// The file that was being replaced.
        path: PathBuf,
        /// The underlying rename failure.
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Text that cannot be decoded from, or encoded to, a file's encoding.
    #[error("Encoding error in {path}: not valid {encoding}")]
    Encoding {
        /// The file being read or written.
        path: PathBuf,
        /// Name of the encoding.
        encoding: &'static str,
    },

    /// Invalid combination of arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for corpus-cleaner operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

impl From<serde_json::Error> for CorpusError {
    fn from(err: serde_json::Error) -> Self {
        CorpusError::Serialization(err.to_string())
    }
}
