// Chunk: docs/chunks/string_builder - Growable byte builder with positional formatted insert

//! StringBuilder is the main public API of the crate.
//!
//! It owns two byte regions:
//! - the *content* region, holding the logical bytes followed by a `0`
//!   terminator at index `len()`
//! - the *scratch* region, a landing pad where formatted output is rendered
//!   before it is spliced into the content region
//!
//! An insert renders into scratch, stages the displaced tail right behind the
//! rendered bytes, grows the content region if needed and copies both back in
//! one pass. Append is an insert at `len()`, so it never has a tail to stage.
//! Delete shifts the tail left over the removed range.
//!
//! Positions and counts are clamped, never rejected.

use std::fmt;
use std::fs::File;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::BuilderConfig;
use crate::error::{BuilderError, Result};
use crate::format_sink::{BoundedWriter, LengthProbe};
use crate::growth::DEFAULT_MIN_CAPACITY;
use crate::region::Region;
use crate::source::{read_up_to, SizedReadable};
use crate::types::ResizeFlags;

/// A growable byte buffer with positional insert, append and delete.
///
/// The builder is byte oriented: content may hold any byte values, including
/// embedded zeros. [`StringBuilder::as_bytes`] borrows the content; the
/// borrow checker ends that view at the next mutation.
#[derive(Debug, Clone)]
pub struct StringBuilder {
    content: Region,
    /// Logical content length, excluding the terminator.
    length: usize,
    scratch: Region,
    config: BuilderConfig,
}

impl StringBuilder {
    /// Creates an empty builder with the default capacity.
    pub fn new() -> Self {
        Self {
            content: Region::zeroed("content", DEFAULT_MIN_CAPACITY),
            length: 0,
            scratch: Region::zeroed("scratch", DEFAULT_MIN_CAPACITY),
            config: BuilderConfig::default(),
        }
    }

    /// Creates an empty builder sized for about `capacity` bytes.
    ///
    /// Both regions take the normalized size of `capacity`; `0` yields the
    /// default capacity.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if the regions cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(capacity, BuilderConfig::default())
    }

    /// Creates an empty builder with custom growth policies.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidConfig`] if `config` fails validation,
    /// or [`BuilderError::Allocation`] if the regions cannot be allocated.
    pub fn with_config(capacity: usize, config: BuilderConfig) -> Result<Self> {
        config.validate()?;
        let content_size = config
            .content
            .normalize(capacity)
            .ok_or(BuilderError::Allocation {
                requested: capacity,
            })?;
        let scratch_size = config
            .scratch
            .normalize(capacity)
            .ok_or(BuilderError::Allocation {
                requested: capacity,
            })?;

        let builder = Self {
            content: Region::with_size("content", content_size)?,
            length: 0,
            scratch: Region::with_size("scratch", scratch_size)?,
            config,
        };
        builder.assert_invariants();
        Ok(builder)
    }

    /// Creates a builder holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if the content cannot be allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut builder = Self::new();
        builder.append(bytes)?;
        Ok(builder)
    }

    /// Creates a builder holding every remaining byte of `source`.
    ///
    /// The content region is sized from [`SizedReadable::remaining_len`] and
    /// filled directly. All bytes read become content, embedded zeros
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::TruncatedRead`] if the source delivers fewer
    /// bytes than it advertised, [`BuilderError::Io`] if reading fails and
    /// [`BuilderError::Allocation`] if the content cannot be allocated.
    pub fn from_source<R: SizedReadable>(mut source: R) -> Result<Self> {
        let remaining = source.remaining_len()?;
        let expected = usize::try_from(remaining).map_err(|_| BuilderError::Allocation {
            requested: usize::MAX,
        })?;
        let capacity = expected
            .checked_add(1)
            .ok_or(BuilderError::Allocation {
                requested: expected,
            })?;

        let mut builder = Self::with_capacity(capacity)?;
        let actual = read_up_to(&mut source, &mut builder.content.as_mut_slice()[..expected])?;
        if actual < expected {
            warn!(expected, actual, "source ended before its advertised length");
            return Err(BuilderError::TruncatedRead { expected, actual });
        }

        // The region is freshly zeroed and larger than `expected`, so the
        // terminator is already in place.
        builder.length = expected;
        builder.assert_invariants();
        Ok(builder)
    }

    /// Creates a builder holding the contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// See [`StringBuilder::from_source`]; opening the file may also fail
    /// with [`BuilderError::Io`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_source(file)
    }

    /// Returns an independent copy of this builder.
    ///
    /// Unlike `clone`, allocation failure is reported instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if either region cannot be copied.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            content: self.content.try_clone()?,
            length: self.length,
            scratch: self.scratch.try_clone()?,
            config: self.config,
        })
    }

    /// Makes this builder an exact copy of `source`, reusing allocations.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if a region cannot grow. On
    /// failure the content and length of `self` are unchanged.
    pub fn copy_from(&mut self, source: &StringBuilder) -> Result<()> {
        self.scratch.copy_from(&source.scratch)?;
        self.content.copy_from(&source.content)?;
        self.length = source.length;
        self.config = source.config;
        self.assert_invariants();
        Ok(())
    }

    // ==================== Accessors ====================

    /// Returns the logical length in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the builder holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the allocated size of the content region.
    ///
    /// Always greater than [`StringBuilder::len`].
    pub fn capacity(&self) -> usize {
        self.content.size()
    }

    /// Returns the allocated size of the scratch region.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.size()
    }

    /// Returns the growth configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Returns the content, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content.as_slice()[..self.length]
    }

    /// Returns the content followed by its `0` terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.content.as_slice()[..=self.length]
    }

    /// Returns an owned copy of the content.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Consumes the builder, returning its content.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.content.into_vec();
        bytes.truncate(self.length);
        bytes
    }

    // ==================== Debug Assertions ====================

    /// Checks the length/terminator invariants after a mutation.
    ///
    /// Both checks are O(1), so unlike sampled consistency checks this runs
    /// after every mutation. Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        assert!(
            self.length < self.content.size(),
            "length {} does not fit content region of {} bytes",
            self.length,
            self.content.size(),
        );
        assert_eq!(
            self.content.as_slice()[self.length],
            0,
            "content is not terminated at length {}",
            self.length,
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self) {}

    // ==================== Insert / Append ====================

    /// Renders via `render` into scratch and splices the result in at `pos`.
    ///
    /// `max_len` counts a terminator slot, so at most `max_len - 1` bytes
    /// are rendered. Returns the untruncated length reported by the
    /// renderer. Content and length are untouched on error.
    fn splice_rendered<F>(&mut self, pos: usize, max_len: usize, render: F) -> Result<usize>
    where
        F: FnOnce(&mut BoundedWriter<'_>) -> fmt::Result,
    {
        let pos = pos.min(self.length);
        let remainder = self.length - pos;

        let scratch_needed = max_len
            .checked_add(remainder)
            .ok_or(BuilderError::Allocation { requested: max_len })?;
        self.scratch.reserve(&self.config.scratch, scratch_needed)?;

        let mut writer = BoundedWriter::new(self.scratch.as_mut_slice(), max_len.saturating_sub(1));
        if render(&mut writer).is_err() {
            return Err(BuilderError::Format);
        }
        let written = writer.offered();
        let rendered = writer.stored();
        if rendered < written {
            debug!(written, rendered, max_len, "formatted insert truncated");
        }

        // Stage the displaced tail right behind the rendered bytes.
        if remainder > 0 {
            self.scratch.as_mut_slice()[rendered..rendered + remainder]
                .copy_from_slice(&self.content.as_slice()[pos..self.length]);
        }

        let new_length = self.length + rendered;
        let content_needed = new_length
            .checked_add(1)
            .ok_or(BuilderError::Allocation {
                requested: new_length,
            })?;
        self.content.reserve(&self.config.content, content_needed)?;

        let spliced = rendered + remainder;
        let content = self.content.as_mut_slice();
        content[pos..pos + spliced].copy_from_slice(&self.scratch.as_slice()[..spliced]);
        content[new_length] = 0;
        self.length = new_length;

        self.assert_invariants();
        Ok(written)
    }

    /// Inserts formatted text at `pos`, rendering at most `max_len - 1` bytes.
    ///
    /// `pos` past the end appends. Returns the length the formatted text has
    /// without truncation; a result of `max_len` or more means the inserted
    /// text was cut short.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Format`] if a formatting impl fails and
    /// [`BuilderError::Allocation`] if a region cannot grow.
    pub fn insert_fmt_bounded(
        &mut self,
        pos: usize,
        max_len: usize,
        args: fmt::Arguments<'_>,
    ) -> Result<usize> {
        self.splice_rendered(pos, max_len, |writer| fmt::write(writer, args))
    }

    /// Inserts formatted text at `pos`.
    ///
    /// The rendered length is probed first so the scratch region is sized
    /// exactly once. Returns the number of bytes inserted.
    ///
    /// ```
    /// use scribe_builder::StringBuilder;
    ///
    /// let mut builder = StringBuilder::from_bytes(b"total: ").unwrap();
    /// builder.insert_fmt(0, format_args!("[{:>3}] ", 7)).unwrap();
    /// assert_eq!(builder.as_bytes(), b"[  7] total: ");
    /// ```
    ///
    /// # Errors
    ///
    /// See [`StringBuilder::insert_fmt_bounded`].
    pub fn insert_fmt(&mut self, pos: usize, args: fmt::Arguments<'_>) -> Result<usize> {
        let probed = LengthProbe::measure(args).ok_or(BuilderError::Format)?;
        self.insert_fmt_bounded(pos, probed.saturating_add(1), args)
    }

    /// Appends formatted text, rendering at most `max_len - 1` bytes.
    ///
    /// # Errors
    ///
    /// See [`StringBuilder::insert_fmt_bounded`].
    pub fn append_fmt_bounded(&mut self, max_len: usize, args: fmt::Arguments<'_>) -> Result<usize> {
        self.insert_fmt_bounded(self.length, max_len, args)
    }

    /// Appends formatted text.
    ///
    /// # Errors
    ///
    /// See [`StringBuilder::insert_fmt_bounded`].
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<usize> {
        self.insert_fmt(self.length, args)
    }

    /// Inserts at most `max_len - 1` bytes of `bytes` at `pos`.
    ///
    /// Returns `bytes.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if a region cannot grow.
    pub fn insert_bounded(&mut self, pos: usize, max_len: usize, bytes: &[u8]) -> Result<usize> {
        self.splice_rendered(pos, max_len, |writer| {
            writer.write_bytes(bytes);
            Ok(())
        })
    }

    /// Inserts `bytes` verbatim at `pos`. Returns the number of bytes inserted.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if a region cannot grow.
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) -> Result<usize> {
        self.insert_bounded(pos, bytes.len().saturating_add(1), bytes)
    }

    /// Appends at most `max_len - 1` bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if a region cannot grow.
    pub fn append_bounded(&mut self, max_len: usize, bytes: &[u8]) -> Result<usize> {
        self.insert_bounded(self.length, max_len, bytes)
    }

    /// Appends `bytes` verbatim. Returns the number of bytes appended.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if a region cannot grow.
    pub fn append(&mut self, bytes: &[u8]) -> Result<usize> {
        self.insert(self.length, bytes)
    }

    // ==================== Delete ====================

    /// Deletes `count` bytes starting at `pos`.
    ///
    /// Does nothing if `pos` is past the end; `count` is clamped to the
    /// bytes available after `pos`.
    pub fn delete(&mut self, pos: usize, count: usize) {
        if count == 0 || pos > self.length {
            return;
        }
        let count = count.min(self.length - pos);

        // Moves the terminator along with the tail.
        self.content
            .as_mut_slice()
            .copy_within(pos + count..=self.length, pos);
        self.length -= count;

        self.assert_invariants();
    }

    /// Deletes the bytes from `begin` through `end`, inclusive.
    ///
    /// `end` is clamped to the content length; does nothing if `end < begin`.
    pub fn delete_range(&mut self, begin: usize, end: usize) {
        let end = end.min(self.length);
        if end < begin {
            return;
        }
        self.delete(begin, end - begin + 1);
    }

    // ==================== Resize ====================

    /// Resizes the regions selected by `flags` for a `target` size.
    ///
    /// With [`ResizeFlags::FORCE`] a region becomes exactly `target` bytes
    /// (the content region keeps at least one byte for its terminator);
    /// otherwise it takes the normalized size of `target`. Content longer
    /// than `target`, or than the new region can hold, is truncated.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if a region cannot grow. A region
    /// that fails to grow is left as it was.
    pub fn resize(&mut self, target: usize, flags: ResizeFlags) -> Result<()> {
        let force = flags.contains(ResizeFlags::FORCE);

        if flags.contains(ResizeFlags::CONTENT) {
            if force {
                self.content.set_size(target.max(1))?;
            } else {
                self.content.resize_natural(&self.config.content, target)?;
            }

            let keep = target.min(self.content.size() - 1);
            if self.length > keep {
                debug!(old_length = self.length, new_length = keep, "resize truncated content");
                self.length = keep;
            }
            self.content.as_mut_slice()[self.length] = 0;
        }

        if flags.contains(ResizeFlags::SCRATCH) {
            if force {
                self.scratch.set_size(target)?;
            } else {
                self.scratch.resize_natural(&self.config.scratch, target)?;
            }
        }

        self.assert_invariants();
        Ok(())
    }

    /// Shrinks the content region to exactly `len() + 1` bytes and the
    /// scratch region to its minimum size.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] in the unlikely case that a
    /// region has to grow to reach its fitted size.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.resize(self.length + 1, ResizeFlags::CONTENT | ResizeFlags::FORCE)?;
        self.resize(0, ResizeFlags::SCRATCH)
    }

    /// Drops all content and returns both regions to their minimum size.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Allocation`] if a region below its minimum
    /// size cannot grow back to it.
    pub fn clear(&mut self) -> Result<()> {
        self.resize(0, ResizeFlags::BOTH)
    }
}

impl Default for StringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s.as_bytes()).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
