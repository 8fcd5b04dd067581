//! Error types for keylist.
//!
//! The input state machine itself is total and never fails. Errors only arise
//! at the edges: reading or writing the persisted collection, loading
//! configuration, and parsing textual key names. All of them are collected in
//! [`KeylistError`] and implemented with `thiserror`.

use thiserror::Error;

/// The main error type for keylist operations.
///
/// # Examples
///
/// ```
/// use keylist::KeylistError;
///
/// let err = KeylistError::Config("seed_items must be true or false".to_string());
/// assert_eq!(err.to_string(), "Configuration error: seed_items must be true or false");
/// ```
#[derive(Debug, Error)]
pub enum KeylistError {
    /// Storage operation failed.
    ///
    /// Raised when the persisted collection cannot be parsed or serialized.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A textual key name did not match any known key.
    #[error("Unknown key: {0}")]
    Key(String),
}

/// A specialized `Result` type for keylist operations.
pub type Result<T> = std::result::Result<T, KeylistError>;
