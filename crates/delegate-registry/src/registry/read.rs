//! Read path — raw cells, fingerprint resolution and enumeration.
//!
//! Enumeration walks a principal's outbox log, drops repeated
//! fingerprints (first occurrence wins) and drops entries whose record is
//! no longer enabled. What survives is reconstructed from cells.

use alloy_primitives::{Address, B256};

use crate::hash::{Fingerprint, Location};
use crate::outbox::first_occurrences;
use crate::record::{DelegationRecord, Record, RecordCell, RecordStore};

use super::DelegateRegistry;

impl<S: RecordStore> DelegateRegistry<S> {
    // ── Raw cells ────────────────────────────────────────────────────────

    /// Raw word at `cell` of the record under `location`. Zero if unset.
    pub fn read_cell(&self, location: &Location, cell: RecordCell) -> B256 {
        self.store().load(location, cell)
    }

    /// All six cells of the record under `location`.
    pub fn read_record(&self, location: &Location) -> Record {
        self.store().load_record(location)
    }

    /// Raw words at each `(location, cell)` pair, in order.
    pub fn read_cells(&self, slots: &[(Location, RecordCell)]) -> Vec<B256> {
        slots
            .iter()
            .map(|(location, cell)| self.read_cell(location, *cell))
            .collect()
    }

    // ── Fingerprint resolution ───────────────────────────────────────────

    /// Whether the grant identified by `fingerprint` is currently enabled.
    pub fn is_enabled(&self, fingerprint: &Fingerprint) -> bool {
        let location = self.location_of(fingerprint);
        self.read_cell(&location, RecordCell::Vault) != B256::ZERO
    }

    /// Reconstruct the live grant for `fingerprint`, if any.
    pub fn delegation(&self, fingerprint: &Fingerprint) -> Option<DelegationRecord> {
        let location = self.location_of(fingerprint);
        DelegationRecord::from_cells(fingerprint, &self.read_record(&location))
    }

    /// Resolve each fingerprint in order.
    ///
    /// Unknown, disabled and malformed fingerprints resolve to `None`, so
    /// the output is index-aligned with the input.
    pub fn delegations_from_fingerprints(
        &self,
        fingerprints: &[Fingerprint],
    ) -> Vec<Option<DelegationRecord>> {
        fingerprints.iter().map(|fp| self.delegation(fp)).collect()
    }

    // ── Enumeration ──────────────────────────────────────────────────────

    /// Live grants issued by `vault`, in first-enable order.
    pub fn delegations_for_vault(&self, vault: Address) -> Vec<DelegationRecord> {
        self.resolve_live(&self.outgoing_fingerprints(vault))
    }

    /// Live grants received by `delegate`, in first-enable order.
    pub fn delegations_for_delegate(&self, delegate: Address) -> Vec<DelegationRecord> {
        self.resolve_live(&self.incoming_fingerprints(delegate))
    }

    /// Fingerprints of live grants issued by `vault`, deduplicated.
    pub fn outgoing_fingerprints(&self, vault: Address) -> Vec<Fingerprint> {
        self.live_entries("outgoing", vault, self.outbox().outgoing(&vault))
    }

    /// Fingerprints of live grants received by `delegate`, deduplicated.
    pub fn incoming_fingerprints(&self, delegate: Address) -> Vec<Fingerprint> {
        self.live_entries("incoming", delegate, self.outbox().incoming(&delegate))
    }

    /// Raw outgoing log length of `vault`, stale entries included.
    pub fn outbox_len_for_vault(&self, vault: Address) -> usize {
        self.outbox().outgoing(&vault).len()
    }

    /// Raw incoming log length of `delegate`, stale entries included.
    pub fn outbox_len_for_delegate(&self, delegate: Address) -> usize {
        self.outbox().incoming(&delegate).len()
    }

    fn live_entries(&self, log: &str, owner: Address, entries: &[Fingerprint]) -> Vec<Fingerprint> {
        if entries.len() >= self.config().outbox_scan_warn_threshold {
            log::warn!(
                "scanning {} {log} outbox entries for {owner}; log is never compacted",
                entries.len()
            );
        }

        let live: Vec<Fingerprint> = first_occurrences(entries)
            .into_iter()
            .filter(|fp| self.is_enabled(fp))
            .collect();

        log::trace!(
            "{log} outbox of {owner}: {} entries, {} live",
            entries.len(),
            live.len()
        );
        live
    }

    fn resolve_live(&self, fingerprints: &[Fingerprint]) -> Vec<DelegationRecord> {
        fingerprints
            .iter()
            .filter_map(|fp| self.delegation(fp))
            .collect()
    }
}
