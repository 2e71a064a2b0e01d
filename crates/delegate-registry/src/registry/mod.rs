//! The delegation registry — write path, enumeration and rights checks.
//!
//! A [`DelegateRegistry`] owns everything mutable: the record store, the
//! outbox logs and the event journal. It is created once and passed by
//! reference into every operation; there is no global state.
//!
//! # Modules
//!
//! - [`write`] — enabling and disabling grants, singly or in batches.
//! - [`read`] — raw cell reads, fingerprint resolution and enumeration.
//! - [`check`] — the cascading rights checks.
//! - [`event`] — notifications emitted by every write.
//! - [`interface`] — the feature probe.
//! - [`shared`] — a thread-safe handle over a registry.

pub mod check;
pub mod event;
pub mod interface;
pub mod read;
pub mod shared;
pub mod write;

pub use event::DelegationEvent;
pub use shared::SharedRegistry;

use crate::config::RegistryConfig;
use crate::hash::{Fingerprint, Location};
use crate::outbox::Outbox;
use crate::record::{MemoryRecordStore, RecordStore};

/// Content-addressed delegation registry over a [`RecordStore`].
#[derive(Debug, Clone)]
pub struct DelegateRegistry<S = MemoryRecordStore> {
    config: RegistryConfig,
    store: S,
    outbox: Outbox,
    events: Vec<DelegationEvent>,
}

impl DelegateRegistry<MemoryRecordStore> {
    /// Create an empty in-memory registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty in-memory registry.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_store(config, MemoryRecordStore::new())
    }
}

impl Default for DelegateRegistry<MemoryRecordStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore> DelegateRegistry<S> {
    /// Create a registry over an existing store with empty outboxes.
    pub fn with_store(config: RegistryConfig, store: S) -> Self {
        Self::from_parts(config, store, Outbox::new())
    }

    /// Assemble a registry from restored components.
    pub fn from_parts(config: RegistryConfig, store: S, outbox: Outbox) -> Self {
        Self {
            config,
            store,
            outbox,
            events: Vec::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Outbox logs.
    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    /// Location of `fingerprint` under this registry's base slot.
    pub fn location_of(&self, fingerprint: &Fingerprint) -> Location {
        Location::of(fingerprint, self.config.base_slot)
    }

    /// Events journaled since the last drain, oldest first.
    pub fn events(&self) -> &[DelegationEvent] {
        &self.events
    }

    /// Take all journaled events.
    pub fn drain_events(&mut self) -> Vec<DelegationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run `f` as one atomic unit of work.
    ///
    /// If `f` returns `Err`, every cell write, outbox append and journaled
    /// event it made is discarded and the registry is exactly as it was
    /// before the call.
    pub fn transact<T, E>(
        &mut self,
        f: impl FnOnce(&mut Self) -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        S: Clone,
    {
        let store = self.store.clone();
        let outbox = self.outbox.clone();
        let events = self.events.clone();

        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::debug!("transaction failed, rolling back registry state");
                self.store = store;
                self.outbox = outbox;
                self.events = events;
                Err(err)
            }
        }
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    pub(crate) fn journal(&mut self, event: DelegationEvent) {
        if self.config.record_events {
            self.events.push(event);
        }
    }
}
