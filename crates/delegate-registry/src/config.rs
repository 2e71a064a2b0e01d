//! Registry configuration.
//!
//! Loaded from an optional JSON file; every field has a default, so an
//! empty object (or no file at all) yields a working registry.
//!
//! ```json
//! { "base_slot": "0x0", "outbox_scan_warn_threshold": 1024, "record_events": true }
//! ```

use std::path::Path;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Default log length above which enumeration scans are reported.
pub const DEFAULT_OUTBOX_SCAN_WARN_THRESHOLD: usize = 1024;

/// Tunables for a [`crate::DelegateRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Slot of the record mapping; mixed into every location.
    pub base_slot: U256,
    /// Outbox length at which an enumeration logs a warning.
    pub outbox_scan_warn_threshold: usize,
    /// Keep an in-memory journal of delegation events.
    pub record_events: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_slot: U256::ZERO,
            outbox_scan_warn_threshold: DEFAULT_OUTBOX_SCAN_WARN_THRESHOLD,
            record_events: true,
        }
    }
}

impl RegistryConfig {
    /// Read and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Io` if the file cannot be read,
    /// `RegistryError::InvalidFileFormat` if it is not valid JSON for this
    /// struct, or `RegistryError::InvalidConfig` if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes).map_err(|e| {
            RegistryError::InvalidFileFormat(format!(
                "failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check invariants between fields.
    pub fn validate(&self) -> Result<()> {
        if self.outbox_scan_warn_threshold == 0 {
            return Err(RegistryError::InvalidConfig(
                "outbox_scan_warn_threshold must be > 0".into(),
            ));
        }
        Ok(())
    }
}
