// Chunk: docs/chunks/builder_errors - Recoverable allocation, format and read errors

//! Error types for builder operations.
//!
//! Out-of-range positions and counts are never errors: they are clamped.
//! Everything that can actually fail (allocation, formatting, reading a
//! source, loading configuration) surfaces as a [`BuilderError`].

use std::io;

use thiserror::Error;

/// Errors that can occur while building or mutating a [`StringBuilder`].
///
/// [`StringBuilder`]: crate::StringBuilder
#[derive(Error, Debug)]
pub enum BuilderError {
    /// A `Display`/`Debug` impl inside the format arguments returned an error.
    #[error("formatting failed")]
    Format,
    /// The source advertised more bytes than it delivered.
    #[error("truncated read: expected {expected} bytes, got {actual}")]
    TruncatedRead { expected: usize, actual: usize },
    /// A region could not be allocated, or its size overflowed `usize`.
    #[error("failed to allocate {requested} bytes")]
    Allocation { requested: usize },
    /// IO error while reading a source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A growth policy failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BuilderError>;
