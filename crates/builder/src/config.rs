// Chunk: docs/chunks/builder_config - Growth policy configuration

//! Builder configuration.
//!
//! Each region carries its own [`GrowthPolicy`]. The defaults reproduce the
//! builder's built-in constants (a 64 byte minimum and a 1 KiB threshold for
//! both regions), so most callers never touch this module.
//!
//! ## JSON form
//!
//! ```json
//! {
//!   "content": { "min_capacity": 64, "threshold": 1024 },
//!   "scratch": { "min_capacity": 64, "threshold": 1024 }
//! }
//! ```
//!
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::growth::GrowthPolicy;

/// Per-region growth policies for a [`StringBuilder`].
///
/// [`StringBuilder`]: crate::StringBuilder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Policy for the content region.
    pub content: GrowthPolicy,
    /// Policy for the scratch region.
    pub scratch: GrowthPolicy,
}

impl BuilderConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ConfigParse`] for malformed JSON and
    /// [`BuilderError::InvalidConfig`] if a policy fails validation.
    ///
    /// [`BuilderError::ConfigParse`]: crate::BuilderError::ConfigParse
    /// [`BuilderError::InvalidConfig`]: crate::BuilderError::InvalidConfig
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BuilderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ConfigParse`] if serialization fails.
    ///
    /// [`BuilderError::ConfigParse`]: crate::BuilderError::ConfigParse
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates both policies.
    ///
    /// # Errors
    ///
    /// See [`GrowthPolicy::validate`].
    pub fn validate(&self) -> Result<()> {
        self.content.validate()?;
        self.scratch.validate()
    }
}
