//! Outbox logs — append-only fingerprint histories per principal.
//!
//! Every enable appends the grant's fingerprint to the vault's outgoing
//! log and the delegate's incoming log. Disables append nothing and remove
//! nothing, so logs accumulate duplicates (re-enabled grants) and stale
//! entries (disabled grants). Readers filter both at scan time; see
//! [`first_occurrences`].

use std::collections::{HashMap, HashSet};

use alloy_primitives::Address;

use crate::hash::Fingerprint;

/// The two outbox logs.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    /// Vault → fingerprints of every grant it ever enabled.
    outgoing: HashMap<Address, Vec<Fingerprint>>,
    /// Delegate → fingerprints of every grant it ever received.
    incoming: HashMap<Address, Vec<Fingerprint>>,
}

impl Outbox {
    /// Create empty logs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild logs from exported `(owner, entries)` pairs.
    pub fn from_logs(
        outgoing: impl IntoIterator<Item = (Address, Vec<Fingerprint>)>,
        incoming: impl IntoIterator<Item = (Address, Vec<Fingerprint>)>,
    ) -> Self {
        Self {
            outgoing: outgoing.into_iter().collect(),
            incoming: incoming.into_iter().collect(),
        }
    }

    /// Record an enabled grant in both logs.
    pub fn append(&mut self, vault: Address, delegate: Address, fingerprint: Fingerprint) {
        self.outgoing.entry(vault).or_default().push(fingerprint);
        self.incoming.entry(delegate).or_default().push(fingerprint);
    }

    /// Raw outgoing log of `vault`, duplicates and stale entries included.
    pub fn outgoing(&self, vault: &Address) -> &[Fingerprint] {
        self.outgoing.get(vault).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Raw incoming log of `delegate`, duplicates and stale entries included.
    pub fn incoming(&self, delegate: &Address) -> &[Fingerprint] {
        self.incoming.get(delegate).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every outgoing log, sorted by owner.
    pub fn outgoing_logs(&self) -> Vec<(Address, Vec<Fingerprint>)> {
        sorted_logs(&self.outgoing)
    }

    /// Every incoming log, sorted by owner.
    pub fn incoming_logs(&self) -> Vec<(Address, Vec<Fingerprint>)> {
        sorted_logs(&self.incoming)
    }

    /// Total entries across all outgoing logs.
    pub fn total_entries(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }
}

fn sorted_logs(logs: &HashMap<Address, Vec<Fingerprint>>) -> Vec<(Address, Vec<Fingerprint>)> {
    let mut out: Vec<(Address, Vec<Fingerprint>)> = logs
        .iter()
        .map(|(owner, entries)| (*owner, entries.clone()))
        .collect();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

/// Drop repeated fingerprints, keeping the first occurrence of each in
/// its original position.
///
/// Linear in the log length (visited set) rather than the pairwise scan.
pub fn first_occurrences(entries: &[Fingerprint]) -> Vec<Fingerprint> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter(|fp| seen.insert(**fp))
        .copied()
        .collect()
}
