//! Delegation requests — one write against the registry.
//!
//! A request is what the vault asks for: toggle a grant of some scope to a
//! delegate, under a rights label, with a balance ceiling where the shape
//! carries one. Batches are ordered lists of requests.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::rights::Rights;
use super::scope::Scope;
use super::shape::GrantShape;

/// A single enable/disable request issued by a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRequest {
    /// Who receives (or loses) the capability.
    pub delegate: Address,
    /// Sub-delegation label; wildcard when omitted.
    #[serde(default)]
    pub rights: Rights,
    /// What the capability covers.
    pub scope: Scope,
    /// Ceiling amount. Only meaningful for `Erc20` and `Erc1155`.
    #[serde(default)]
    pub balance: U256,
    /// `true` to grant, `false` to withdraw.
    pub enable: bool,
}

impl DelegationRequest {
    /// Delegate everything.
    pub fn all(delegate: Address, rights: Rights, enable: bool) -> Self {
        Self {
            delegate,
            rights,
            scope: Scope::All,
            balance: U256::ZERO,
            enable,
        }
    }

    /// Delegate everything held under one contract.
    pub fn contract(delegate: Address, contract: Address, rights: Rights, enable: bool) -> Self {
        Self {
            delegate,
            rights,
            scope: Scope::Contract { contract },
            balance: U256::ZERO,
            enable,
        }
    }

    /// Delegate a single non-fungible token.
    pub fn erc721(
        delegate: Address,
        contract: Address,
        token_id: U256,
        rights: Rights,
        enable: bool,
    ) -> Self {
        Self {
            delegate,
            rights,
            scope: Scope::Erc721 { contract, token_id },
            balance: U256::ZERO,
            enable,
        }
    }

    /// Delegate a fungible-token allowance up to `balance`.
    pub fn erc20(
        delegate: Address,
        contract: Address,
        balance: U256,
        rights: Rights,
        enable: bool,
    ) -> Self {
        Self {
            delegate,
            rights,
            scope: Scope::Erc20 { contract },
            balance,
            enable,
        }
    }

    /// Delegate up to `balance` units of one semi-fungible token id.
    pub fn erc1155(
        delegate: Address,
        contract: Address,
        token_id: U256,
        balance: U256,
        rights: Rights,
        enable: bool,
    ) -> Self {
        Self {
            delegate,
            rights,
            scope: Scope::Erc1155 { contract, token_id },
            balance,
            enable,
        }
    }

    /// The shape of the requested grant.
    pub fn shape(&self) -> GrantShape {
        self.scope.shape()
    }

    /// The balance to store, if the shape carries one.
    pub fn effective_balance(&self) -> Option<U256> {
        self.shape().has_balance().then_some(self.balance)
    }
}
