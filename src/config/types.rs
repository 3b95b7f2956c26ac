//! Config record and error definitions.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// The persisted service configuration.
///
/// Exactly one field today; absent or unparsable records deserialize to the
/// default (translations enabled), matching the availability-first policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigRecord {
    /// Whether translation bundles are served at all.
    pub translation_enabled: bool,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self { translation_enabled: true }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The backing file could not be written.
    #[error("failed to write config file: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
