//! Location engine — where a grant's record lives.
//!
//! `location = keccak256(fingerprint ‖ base_slot)`, the storage position of
//! `fingerprint` in a mapping declared at `base_slot`. The computation
//! knows nothing about whether a record is present.

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::grant::{Rights, Scope};

use super::fingerprint::Fingerprint;

/// Storage address of a six-cell record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(pub B256);

impl Location {
    /// Derive the location of `fingerprint` under `base_slot`.
    pub fn of(fingerprint: &Fingerprint, base_slot: U256) -> Self {
        let mut preimage = [0u8; 64];
        preimage[..32].copy_from_slice(fingerprint.as_word().as_slice());
        preimage[32..].copy_from_slice(&base_slot.to_be_bytes::<32>());
        Self(keccak256(preimage))
    }

    /// Derive the location straight from grant arguments.
    ///
    /// Equal to `Location::of(&Fingerprint::compute(..), base_slot)`.
    pub fn for_grant(
        scope: &Scope,
        vault: Address,
        delegate: Address,
        rights: Rights,
        base_slot: U256,
    ) -> Self {
        Self::of(&Fingerprint::compute(scope, vault, delegate, rights), base_slot)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Free-function form of [`Location::of`].
pub fn location(fingerprint: &Fingerprint, base_slot: U256) -> Location {
    Location::of(fingerprint, base_slot)
}
