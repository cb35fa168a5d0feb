//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fieldmap operations
#[derive(Debug, Error)]
pub enum FieldmapError {
    /// Template store could not be read
    #[error("Template store error: {message}")]
    Store {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Template store content does not have the expected document shape
    #[error("Invalid template store: {message}")]
    StoreFormat {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for fieldmap operations
pub type Result<T> = std::result::Result<T, FieldmapError>;
