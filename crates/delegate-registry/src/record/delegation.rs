//! Delegation records — grants reconstructed from raw cells.
//!
//! Nothing stores a `DelegationRecord` directly. It is rebuilt on demand
//! from a fingerprint (which yields the shape) and the six cells at the
//! fingerprint's location.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::grant::{GrantShape, Rights, Scope};
use crate::hash::Fingerprint;

use super::cell::{Record, RecordCell};

/// A full, live grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    /// Recovered from the fingerprint's tag, not from storage.
    pub shape: GrantShape,
    /// Granting principal.
    pub vault: Address,
    /// Receiving principal.
    pub delegate: Address,
    /// Sub-delegation label.
    pub rights: Rights,
    /// Asset contract; zero for `All`.
    pub contract: Address,
    /// Token id; zero unless `Erc721` or `Erc1155`.
    pub token_id: U256,
    /// Balance ceiling; zero unless `Erc20` or `Erc1155`.
    pub balance: U256,
}

impl DelegationRecord {
    /// Rebuild the grant identified by `fingerprint` from its stored cells.
    ///
    /// Returns `None` when the record is disabled (vault cell zero) or the
    /// fingerprint's tag names no shape.
    pub fn from_cells(fingerprint: &Fingerprint, record: &Record) -> Option<Self> {
        let shape = fingerprint.shape().ok()?;
        let vault = record.address(RecordCell::Vault);
        if vault.is_zero() {
            return None;
        }

        let cells = shape.asset_cells();
        let address_if = |cell: RecordCell| {
            if cells.contains(&cell) {
                record.address(cell)
            } else {
                Address::ZERO
            }
        };
        let amount_if = |cell: RecordCell| {
            if cells.contains(&cell) {
                record.amount(cell)
            } else {
                U256::ZERO
            }
        };

        Some(Self {
            shape,
            vault,
            delegate: record.address(RecordCell::Delegate),
            rights: Rights(record.word(RecordCell::Rights)),
            contract: address_if(RecordCell::Contract),
            token_id: amount_if(RecordCell::TokenId),
            balance: amount_if(RecordCell::Balance),
        })
    }

    /// Enabled iff the stored vault is non-zero.
    pub fn enabled(&self) -> bool {
        !self.vault.is_zero()
    }

    /// The identity-relevant scope of this grant.
    pub fn scope(&self) -> Scope {
        Scope::from_parts(self.shape, Some(self.contract), Some(self.token_id))
    }

    /// Recompute this grant's fingerprint from its fields.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::compute(&self.scope(), self.vault, self.delegate, self.rights)
    }
}
