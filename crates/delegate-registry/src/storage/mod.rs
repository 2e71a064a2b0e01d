//! Storage layer for registry snapshots.
//!
//! # Directory layout
//!
//! The CLI keeps its state under `~/.delegate-registry/` unless told
//! otherwise:
//!
//! ```text
//! ~/.delegate-registry/
//! ├── config.json      — optional RegistryConfig
//! └── registry.json    — the persisted snapshot
//! ```
//!
//! # Modules
//!
//! - [`snapshot`] — deterministic image of records and outbox logs.
//! - [`registry_store`] — versioned, checksummed JSON file persistence.

pub mod registry_store;
pub mod snapshot;

pub use registry_store::RegistryStore;
pub use snapshot::{LogEntry, RecordEntry, RegistrySnapshot};
