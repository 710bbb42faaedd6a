//! Error types for noteblocks library.
//!
//! Conversion itself never fails; errors only come from reading input,
//! building a parser from invalid limits, or serializing output.

use std::io;
use thiserror::Error;

/// Result type alias for noteblocks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around block conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parse options that would break the paragraph length invariant.
    #[error("Invalid parse options: {0}")]
    InvalidOptions(String),

    /// Error during rendering (JSON, Notion payloads).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
