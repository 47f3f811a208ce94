// Chunk: docs/chunks/string_builder - Growable byte builder with positional formatted insert

//! Growth policy for builder regions.
//!
//! Below the threshold, sizes are rounded up to a power of two (never below
//! the minimum capacity). At or above the threshold, sizes grow in fixed
//! multiples of the threshold, which bounds the relative overhead of large
//! buffers while still amortizing small ones.

use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, Result};

/// Smallest size a naturally-sized region ever takes.
pub const DEFAULT_MIN_CAPACITY: usize = 64;
/// Size at which growth switches from exponential to linear.
pub const DEFAULT_THRESHOLD: usize = 1024;

/// Exponential-then-linear sizing rule for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPolicy {
    /// Minimum size produced by [`GrowthPolicy::normalize`].
    pub min_capacity: usize,
    /// Boundary between the exponential and the linear regime.
    pub threshold: usize,
}

impl GrowthPolicy {
    /// Creates a validated growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidConfig`] if either value is zero or the
    /// minimum capacity exceeds the threshold.
    pub fn new(min_capacity: usize, threshold: usize) -> Result<Self> {
        let policy = Self {
            min_capacity,
            threshold,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Checks the policy's constraints.
    ///
    /// # Errors
    ///
    /// See [`GrowthPolicy::new`].
    pub fn validate(&self) -> Result<()> {
        if self.min_capacity == 0 {
            return Err(BuilderError::InvalidConfig(
                "min_capacity must be at least 1".to_string(),
            ));
        }
        if self.threshold == 0 {
            return Err(BuilderError::InvalidConfig(
                "threshold must be at least 1".to_string(),
            ));
        }
        if self.min_capacity > self.threshold {
            return Err(BuilderError::InvalidConfig(format!(
                "min_capacity ({}) exceeds threshold ({})",
                self.min_capacity, self.threshold
            )));
        }
        Ok(())
    }

    /// Maps a requested size onto the size a region should actually take.
    ///
    /// Returns `None` if the result does not fit in `usize`.
    pub fn normalize(&self, target: usize) -> Option<usize> {
        if target < self.threshold {
            let rounded = target.checked_next_power_of_two()?;
            Some(rounded.max(self.min_capacity))
        } else {
            (target / self.threshold)
                .checked_add(1)?
                .checked_mul(self.threshold)
        }
    }

    /// Size a region of `current` bytes grows to so that it holds `target`.
    ///
    /// Returns `Some(current)` when no growth is needed. Below the threshold
    /// the region at least doubles.
    pub fn grow(&self, current: usize, target: usize) -> Option<usize> {
        if target <= current {
            return Some(current);
        }
        if current < self.threshold {
            self.normalize(target.max(current.saturating_mul(2)))
        } else {
            self.normalize(target)
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
