//! Error types for stash
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StashError
pub type Result<T> = std::result::Result<T, StashError>;

/// Unified error type for stash operations
#[derive(Debug, Error)]
pub enum StashError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Corruption
    // -------------------------------------------------------------------------
    /// Malformed store content: bad percent escape, unterminated quote,
    /// wrong field count, non-numeric timestamp. A corrupted store fails
    /// the whole read rather than looking partially empty.
    #[error("decode error: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Input Validation
    // -------------------------------------------------------------------------
    /// Interactive `set` received an empty value; nothing was written.
    #[error("refusing to store an empty value")]
    EmptyValue,
}
