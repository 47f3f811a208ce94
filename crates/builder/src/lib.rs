// Chunk: docs/chunks/string_builder - Growable byte builder with positional formatted insert

//! scribe-builder: a growable byte buffer for the scribe workspace.
//!
//! This crate provides [`StringBuilder`], a byte buffer that supports append,
//! positional insert and positional delete of literal or formatted bytes
//! without copying the whole buffer on every mutation.
//!
//! # Overview
//!
//! A builder owns two regions:
//! - a *content* region holding the logical bytes, always followed by a `0`
//!   terminator
//! - a *scratch* region where formatted output is staged before it is
//!   spliced into the content at the insertion point
//!
//! Both regions grow exponentially up to a threshold and linearly above it
//! (see [`GrowthPolicy`]), and can be resized explicitly with
//! [`StringBuilder::resize`], [`StringBuilder::clear`] and
//! [`StringBuilder::shrink_to_fit`].
//!
//! # Example
//!
//! ```
//! use scribe_builder::StringBuilder;
//!
//! let mut builder = StringBuilder::from_bytes(b"Hello, World!").unwrap();
//!
//! // Insert literal bytes
//! builder.insert(7, b"Beautiful ").unwrap();
//! assert_eq!(builder.as_bytes(), b"Hello, Beautiful World!");
//!
//! // Append formatted text
//! builder.append_fmt(format_args!(" x{}", 3)).unwrap();
//! assert_eq!(builder.as_bytes(), b"Hello, Beautiful World! x3");
//!
//! // Delete an inclusive range
//! builder.delete_range(6, 15);
//! assert_eq!(builder.as_bytes(), b"Hello, World! x3");
//! ```
//!
//! # Errors
//!
//! Positions and counts are clamped, never rejected. Operations that can
//! really fail (allocation, formatting, reading a source) return a
//! [`BuilderError`].

mod builder;
mod config;
mod error;
mod format_sink;
mod growth;
mod region;
mod source;
mod types;

pub use builder::StringBuilder;
pub use config::BuilderConfig;
pub use error::{BuilderError, Result};
pub use growth::{GrowthPolicy, DEFAULT_MIN_CAPACITY, DEFAULT_THRESHOLD};
pub use source::SizedReadable;
pub use types::ResizeFlags;
