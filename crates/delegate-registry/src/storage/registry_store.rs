//! Registry file persistence.
//!
//! A registry is stored as one JSON file:
//!
//! ```json
//! {
//!   "version": 1,
//!   "saved_at": 1700000000000000,
//!   "checksum": "<sha256 hex of the snapshot>",
//!   "snapshot": { "base_slot": "0x0", "records": [...], "outgoing": [...], "incoming": [...] }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::registry::DelegateRegistry;

use super::snapshot::RegistrySnapshot;

// ── File format constants ─────────────────────────────────────────────────────

const REGISTRY_FILE_VERSION: u32 = 1;

// ── On-disk structure ─────────────────────────────────────────────────────────

/// Wrapper written to disk.
#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    /// Format version number.
    version: u32,
    /// Save time in microseconds since the epoch.
    saved_at: u64,
    /// SHA-256 of the serialized snapshot.
    checksum: String,
    /// The stored state.
    snapshot: RegistrySnapshot,
}

// ── RegistryStore ─────────────────────────────────────────────────────────────

/// Filesystem-backed store for one registry snapshot.
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Create a store writing to `path`. Nothing is touched until `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the registry file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a registry file exists at the path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist `registry`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SerializationError` if serialization fails, or
    /// `RegistryError::Io` for filesystem errors.
    pub fn save(&self, registry: &DelegateRegistry) -> Result<()> {
        let snapshot = RegistrySnapshot::capture(registry);
        let file = RegistryFile {
            version: REGISTRY_FILE_VERSION,
            saved_at: crate::time::now_micros(),
            checksum: snapshot.checksum()?,
            snapshot,
        };

        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| RegistryError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json.as_bytes())?;

        log::info!(
            "saved registry to {} ({} records, {} outbox entries)",
            self.path.display(),
            file.snapshot.records.len(),
            registry.outbox().total_entries()
        );
        Ok(())
    }

    /// Load the registry, or an empty one if no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidFileFormat` for malformed files,
    /// `RegistryError::UnsupportedVersion` for unknown versions,
    /// `RegistryError::ChecksumMismatch` if the snapshot was altered,
    /// `RegistryError::InvalidConfig` if `config` names a different base
    /// slot, or `RegistryError::Io` for filesystem errors.
    pub fn load(&self, config: RegistryConfig) -> Result<DelegateRegistry> {
        if !self.exists() {
            log::info!("no registry at {}, starting empty", self.path.display());
            return Ok(DelegateRegistry::with_config(config));
        }

        let bytes = std::fs::read(&self.path)?;
        let file: RegistryFile = serde_json::from_slice(&bytes).map_err(|e| {
            RegistryError::InvalidFileFormat(format!(
                "failed to parse registry file {}: {e}",
                self.path.display()
            ))
        })?;

        if file.version != REGISTRY_FILE_VERSION {
            return Err(RegistryError::UnsupportedVersion(file.version));
        }

        let actual = file.snapshot.checksum()?;
        if actual != file.checksum {
            return Err(RegistryError::ChecksumMismatch {
                expected: file.checksum,
                actual,
            });
        }

        log::info!(
            "loaded registry from {} saved at {}",
            self.path.display(),
            crate::time::micros_to_rfc3339(file.saved_at)
        );
        file.snapshot.restore(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
