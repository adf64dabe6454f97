//! Error types for the Mistype library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`MistypeError`] enum. The taxonomy is deliberately small: an
//! unreadable word source, an empty closest-match result, and the
//! generic conversions needed at the CLI boundary.
//!
//! # Examples
//!
//! ```
//! use mistype::error::{MistypeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MistypeError::empty_result("no candidate qualified"))
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

/// The main error type for Mistype operations.
#[derive(Error, Debug)]
pub enum MistypeError {
    /// The external word source could not be read.
    #[error("Word source unavailable: {0}")]
    SourceUnavailable(#[from] io::Error),

    /// Closest-match resolution was requested but no dictionary entry
    /// qualified as a typo of the input word.
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MistypeError.
pub type Result<T> = std::result::Result<T, MistypeError>;

impl MistypeError {
    /// Create a new empty result error.
    pub fn empty_result<S: Into<String>>(msg: S) -> Self {
        MistypeError::EmptyResult(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MistypeError::Other(msg.into())
    }
}
