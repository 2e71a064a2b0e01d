//! DelegateRegistry — content-addressed delegation registry.
//!
//! A vault grants a delegate the right to act on its behalf, scoped to
//! everything, one asset contract, one token, a fungible allowance or a
//! semi-fungible allowance, optionally narrowed by a rights label. Grants
//! are stored as fixed six-cell records under keccak-derived locations,
//! enumerated through append-only outbox logs, and verified by a
//! cascading rights check in which broader grants satisfy narrower ones.

pub mod config;
pub mod error;
pub mod grant;
pub mod hash;
pub mod outbox;
pub mod record;
pub mod registry;
pub mod storage;
pub mod time;

// Re-export primary types
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use grant::{DelegationRequest, GrantShape, Rights, Scope};
pub use hash::{Fingerprint, Location};
pub use record::{DelegationRecord, MemoryRecordStore, Record, RecordCell, RecordStore};
pub use registry::{DelegateRegistry, DelegationEvent, SharedRegistry};
pub use storage::{RegistrySnapshot, RegistryStore};

// Re-export the probe
pub use registry::interface::{registry_interface_id, supports_interface, INTERFACE_PROBE_ID};
