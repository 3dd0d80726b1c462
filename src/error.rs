//! Error types for the Lexnet library.
//!
//! This module provides error handling for all Lexnet operations. All errors
//! are represented by the [`LexnetError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use lexnet::error::{LexnetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(LexnetError::config("Invalid selector"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Lexnet operations.
///
/// This enum represents all possible errors that can occur in the Lexnet
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum LexnetError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document-related errors (spans, annotation sets, offsets)
    #[error("Document error: {0}")]
    Document(String),

    /// Lexicon-related errors (lookup backend, lexicon files)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors (selectors, enricher parameters)
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexnetError.
pub type Result<T> = std::result::Result<T, LexnetError>;

impl LexnetError {
    /// Create a new document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        LexnetError::Document(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LexnetError::Lexicon(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexnetError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexnetError::document("Test document error");
        assert_eq!(error.to_string(), "Document error: Test document error");

        let error = LexnetError::lexicon("Test lexicon error");
        assert_eq!(error.to_string(), "Lexicon error: Test lexicon error");

        let error = LexnetError::config("Test config error");
        assert_eq!(error.to_string(), "Config error: Test config error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexnet_error = LexnetError::from(io_error);

        match lexnet_error {
            LexnetError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
