//! Delegation events — what observers learn about each write.
//!
//! One event is produced for every enable or disable, including disables
//! of grants that were never enabled.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::grant::{DelegationRequest, GrantShape, Rights, Scope};
use crate::hash::Fingerprint;

/// Notification for a single write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationEvent {
    pub vault: Address,
    pub delegate: Address,
    pub rights: Rights,
    pub scope: Scope,
    /// Present for `Erc20` and `Erc1155` only.
    pub balance: Option<U256>,
    pub enable: bool,
    pub fingerprint: Fingerprint,
}

impl DelegationEvent {
    /// Build the event describing `request` issued by `vault`.
    pub fn from_request(vault: Address, request: &DelegationRequest, fingerprint: Fingerprint) -> Self {
        Self {
            vault,
            delegate: request.delegate,
            rights: request.rights,
            scope: request.scope,
            balance: request.effective_balance(),
            enable: request.enable,
            fingerprint,
        }
    }

    /// Shape of the affected grant.
    pub fn shape(&self) -> GrantShape {
        self.scope.shape()
    }
}

impl std::fmt::Display for DelegationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} vault={} delegate={} rights={}",
            if self.enable { "enable" } else { "disable" },
            self.shape(),
            self.vault,
            self.delegate,
            self.rights,
        )?;
        if let Some(contract) = self.scope.contract() {
            write!(f, " contract={contract}")?;
        }
        if let Some(token_id) = self.scope.token_id() {
            write!(f, " token_id={token_id}")?;
        }
        if let Some(balance) = self.balance {
            write!(f, " balance={balance}")?;
        }
        Ok(())
    }
}
