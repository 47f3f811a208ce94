// Chunk: docs/chunks/string_builder - Growable byte builder with positional formatted insert

//! A byte region whose allocated size is tracked exactly.
//!
//! `Vec`'s own capacity is an implementation detail of the allocator, so the
//! region keeps its bytes fully initialized: `data.len()` *is* the region
//! size. Growth goes through `try_reserve_exact` so that exhaustion surfaces
//! as [`BuilderError::Allocation`] instead of aborting.

use tracing::{error, trace};

use crate::error::{BuilderError, Result};
use crate::growth::GrowthPolicy;

/// One zero-initialized byte region of an exact size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Region {
    /// Region storage. Always exactly `size()` bytes long.
    data: Vec<u8>,
    /// Name used in diagnostics ("content" or "scratch").
    name: &'static str,
}

impl Region {
    /// Allocates a zeroed region of exactly `size` bytes.
    pub fn with_size(name: &'static str, size: usize) -> Result<Self> {
        let mut region = Self {
            data: Vec::new(),
            name,
        };
        region.set_size(size)?;
        Ok(region)
    }

    /// Allocates a zeroed region of exactly `size` bytes, aborting on
    /// allocation failure like any other `Vec` allocation.
    pub fn zeroed(name: &'static str, size: usize) -> Self {
        Self {
            data: vec![0; size],
            name,
        }
    }

    /// Returns an independent copy, reporting allocation failure.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::with_size(self.name, self.size())?;
        copy.data.copy_from_slice(&self.data);
        Ok(copy)
    }

    /// Consumes the region, returning its storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Returns the allocated size of the region.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Grows the region on demand so that it holds at least `target` bytes.
    ///
    /// Never shrinks. Existing bytes are preserved.
    pub fn reserve(&mut self, policy: &GrowthPolicy, target: usize) -> Result<()> {
        if target <= self.size() {
            return Ok(());
        }
        let new_size = policy
            .grow(self.size(), target)
            .ok_or(BuilderError::Allocation { requested: target })?;
        self.set_size(new_size)
    }

    /// Resizes the region to `policy.normalize(target)`.
    pub fn resize_natural(&mut self, policy: &GrowthPolicy, target: usize) -> Result<()> {
        let new_size = policy
            .normalize(target)
            .ok_or(BuilderError::Allocation { requested: target })?;
        self.set_size(new_size)
    }

    /// Resizes the region to exactly `size` bytes.
    ///
    /// Bytes past the new end are dropped; new bytes are zeroed.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        let old_size = self.size();
        if size == old_size {
            return Ok(());
        }

        if size > old_size {
            let additional = size - old_size;
            if let Err(err) = self.data.try_reserve_exact(additional) {
                error!(
                    region = self.name,
                    requested = size,
                    "region allocation failed: {}",
                    err
                );
                return Err(BuilderError::Allocation { requested: size });
            }
            self.data.resize(size, 0);
        } else {
            self.data.truncate(size);
            self.data.shrink_to_fit();
        }

        trace!(region = self.name, old_size, new_size = size, "region resized");
        Ok(())
    }

    /// Replaces this region's size and bytes with those of `other`.
    pub fn copy_from(&mut self, other: &Region) -> Result<()> {
        self.set_size(other.size())?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }
}
