// Chunk: docs/chunks/string_builder - Growable byte builder with positional formatted insert

//! Formatting sinks used to stage output in the scratch region.
//!
//! [`LengthProbe`] discards output and only counts it, which is how the
//! unbounded insert variants learn the rendered length up front.
//! [`BoundedWriter`] renders into a borrowed slice with snprintf-like
//! truncation: it stores at most `limit` bytes but keeps counting, so the
//! caller can tell how long the untruncated output would have been.

use std::fmt;

/// A `fmt::Write` sink that only counts bytes.
#[derive(Debug, Default)]
pub(crate) struct LengthProbe {
    len: usize,
}

impl LengthProbe {
    /// Returns the rendered length of `args`, or `None` if formatting failed.
    pub fn measure(args: fmt::Arguments<'_>) -> Option<usize> {
        let mut probe = Self::default();
        fmt::write(&mut probe, args).ok()?;
        Some(probe.len)
    }
}

impl fmt::Write for LengthProbe {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        Ok(())
    }
}

/// A `fmt::Write` sink over a byte slice that truncates past `limit` bytes.
#[derive(Debug)]
pub(crate) struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    /// Maximum number of bytes stored; never more than `buf.len()`.
    limit: usize,
    /// Bytes actually stored in `buf`.
    stored: usize,
    /// Bytes offered by the formatter, stored or not.
    offered: usize,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(buf: &'a mut [u8], limit: usize) -> Self {
        let limit = limit.min(buf.len());
        Self {
            buf,
            limit,
            stored: 0,
            offered: 0,
        }
    }

    /// Appends raw bytes, truncating at the limit.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.offered = self.offered.saturating_add(bytes.len());
        let room = self.limit - self.stored;
        let take = bytes.len().min(room);
        self.buf[self.stored..self.stored + take].copy_from_slice(&bytes[..take]);
        self.stored += take;
    }

    /// Number of bytes actually stored.
    pub fn stored(&self) -> usize {
        self.stored
    }

    /// Number of bytes the formatter produced, including truncated ones.
    pub fn offered(&self) -> usize {
        self.offered
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
