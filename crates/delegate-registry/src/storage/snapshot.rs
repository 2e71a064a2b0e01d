//! Registry snapshots — a serializable image of records and outboxes.
//!
//! Everything is emitted in sorted key order so that two registries with
//! the same contents produce byte-identical snapshots and checksums. The
//! event journal is not part of a snapshot.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::hash::{Fingerprint, Location};
use crate::outbox::Outbox;
use crate::record::{MemoryRecordStore, Record};
use crate::registry::DelegateRegistry;

/// One non-empty record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub location: Location,
    pub cells: Record,
}

/// One principal's outbox log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub owner: Address,
    pub fingerprints: Vec<Fingerprint>,
}

/// Full registry state minus the event journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub base_slot: U256,
    pub records: Vec<RecordEntry>,
    pub outgoing: Vec<LogEntry>,
    pub incoming: Vec<LogEntry>,
}

impl RegistrySnapshot {
    /// Capture the current state of `registry`.
    pub fn capture(registry: &DelegateRegistry) -> Self {
        let records = registry
            .store()
            .records()
            .into_iter()
            .map(|(location, cells)| RecordEntry { location, cells })
            .collect();

        Self {
            base_slot: registry.config().base_slot,
            records,
            outgoing: to_entries(registry.outbox().outgoing_logs()),
            incoming: to_entries(registry.outbox().incoming_logs()),
        }
    }

    /// Rebuild a registry from this snapshot under `config`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidConfig` if `config.base_slot` differs
    /// from the slot the snapshot was taken under; every stored location
    /// would be unreachable otherwise.
    pub fn restore(self, config: RegistryConfig) -> Result<DelegateRegistry> {
        if config.base_slot != self.base_slot {
            return Err(RegistryError::InvalidConfig(format!(
                "snapshot base slot {} does not match configured base slot {}",
                self.base_slot, config.base_slot
            )));
        }

        let store = MemoryRecordStore::from_records(
            self.records
                .into_iter()
                .map(|entry| (entry.location, entry.cells)),
        );
        let outbox = Outbox::from_logs(from_entries(self.outgoing), from_entries(self.incoming));
        Ok(DelegateRegistry::from_parts(config, store, outbox))
    }

    /// SHA-256 of the canonical JSON encoding, hex-encoded.
    pub fn checksum(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)
            .map_err(|e| RegistryError::SerializationError(e.to_string()))?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

fn to_entries(logs: Vec<(Address, Vec<Fingerprint>)>) -> Vec<LogEntry> {
    logs.into_iter()
        .map(|(owner, fingerprints)| LogEntry {
            owner,
            fingerprints,
        })
        .collect()
}

fn from_entries(entries: Vec<LogEntry>) -> impl Iterator<Item = (Address, Vec<Fingerprint>)> {
    entries
        .into_iter()
        .map(|entry| (entry.owner, entry.fingerprints))
}
