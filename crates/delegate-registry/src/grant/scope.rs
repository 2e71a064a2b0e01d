//! Grant scopes — the identity-relevant part of a delegation's domain.
//!
//! A scope carries exactly the fields that are hashed into a fingerprint
//! for its shape. Balances are deliberately absent: only *whether* a
//! balance-bearing grant exists is part of its identity.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::shape::GrantShape;

/// The domain a grant applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Scope {
    All,
    Contract {
        contract: Address,
    },
    Erc721 {
        contract: Address,
        token_id: U256,
    },
    Erc20 {
        contract: Address,
    },
    Erc1155 {
        contract: Address,
        token_id: U256,
    },
}

impl Scope {
    /// The shape this scope belongs to.
    pub fn shape(&self) -> GrantShape {
        match self {
            Scope::All => GrantShape::All,
            Scope::Contract { .. } => GrantShape::Contract,
            Scope::Erc721 { .. } => GrantShape::Erc721,
            Scope::Erc20 { .. } => GrantShape::Erc20,
            Scope::Erc1155 { .. } => GrantShape::Erc1155,
        }
    }

    /// The asset contract, for every shape except `All`.
    pub fn contract(&self) -> Option<Address> {
        match self {
            Scope::All => None,
            Scope::Contract { contract }
            | Scope::Erc721 { contract, .. }
            | Scope::Erc20 { contract }
            | Scope::Erc1155 { contract, .. } => Some(*contract),
        }
    }

    /// The token id, for `Erc721` and `Erc1155`.
    pub fn token_id(&self) -> Option<U256> {
        match self {
            Scope::Erc721 { token_id, .. } | Scope::Erc1155 { token_id, .. } => Some(*token_id),
            _ => None,
        }
    }

    /// Build a scope from a shape and optional asset fields.
    ///
    /// Fields the shape does not use are ignored; fields it needs but that
    /// are missing default to zero.
    pub fn from_parts(shape: GrantShape, contract: Option<Address>, token_id: Option<U256>) -> Self {
        let contract = contract.unwrap_or(Address::ZERO);
        let token_id = token_id.unwrap_or(U256::ZERO);
        match shape {
            GrantShape::All => Scope::All,
            GrantShape::Contract => Scope::Contract { contract },
            GrantShape::Erc721 => Scope::Erc721 { contract, token_id },
            GrantShape::Erc20 => Scope::Erc20 { contract },
            GrantShape::Erc1155 => Scope::Erc1155 { contract, token_id },
        }
    }
}
