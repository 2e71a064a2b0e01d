//! Grant shapes — the five domains a delegation can be scoped to.
//!
//! The shape's tag is stamped into the low byte of every fingerprint, so
//! it doubles as the discriminator for reconstructing records.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::record::RecordCell;

/// Closed set of grant shapes, ordered from broadest to narrowest.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrantShape {
    /// Unconditional: the delegate may act for the vault on anything.
    All = 1,
    /// Everything held under one asset contract.
    Contract = 2,
    /// A single non-fungible token.
    Erc721 = 3,
    /// A fungible-token allowance with an amount ceiling.
    Erc20 = 4,
    /// A semi-fungible token id with an amount ceiling.
    Erc1155 = 5,
}

impl GrantShape {
    /// Every shape, in tag order.
    pub const ALL: [GrantShape; 5] = [
        GrantShape::All,
        GrantShape::Contract,
        GrantShape::Erc721,
        GrantShape::Erc20,
        GrantShape::Erc1155,
    ];

    /// The tag stored in a fingerprint's low byte.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Lower-case name used on the command line and in serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            GrantShape::All => "all",
            GrantShape::Contract => "contract",
            GrantShape::Erc721 => "erc721",
            GrantShape::Erc20 => "erc20",
            GrantShape::Erc1155 => "erc1155",
        }
    }

    /// Record cells owned by this shape beyond delegate, vault and rights.
    ///
    /// This is the only table describing which optional cells a shape
    /// writes; the write path and the reconstruction path both read it.
    pub fn asset_cells(self) -> &'static [RecordCell] {
        match self {
            GrantShape::All => &[],
            GrantShape::Contract => &[RecordCell::Contract],
            GrantShape::Erc721 => &[RecordCell::Contract, RecordCell::TokenId],
            GrantShape::Erc20 => &[RecordCell::Contract, RecordCell::Balance],
            GrantShape::Erc1155 => &[
                RecordCell::Contract,
                RecordCell::Balance,
                RecordCell::TokenId,
            ],
        }
    }

    /// Whether grants of this shape name an asset contract.
    pub fn has_contract(self) -> bool {
        self.asset_cells().contains(&RecordCell::Contract)
    }

    /// Whether grants of this shape name a token id.
    pub fn has_token_id(self) -> bool {
        self.asset_cells().contains(&RecordCell::TokenId)
    }

    /// Whether grants of this shape carry a balance ceiling.
    pub fn has_balance(self) -> bool {
        self.asset_cells().contains(&RecordCell::Balance)
    }
}

impl TryFrom<u8> for GrantShape {
    type Error = RegistryError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(GrantShape::All),
            2 => Ok(GrantShape::Contract),
            3 => Ok(GrantShape::Erc721),
            4 => Ok(GrantShape::Erc20),
            5 => Ok(GrantShape::Erc1155),
            other => Err(RegistryError::UnknownShapeTag(other)),
        }
    }
}

impl std::fmt::Display for GrantShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GrantShape {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(GrantShape::All),
            "contract" => Ok(GrantShape::Contract),
            "erc721" => Ok(GrantShape::Erc721),
            "erc20" => Ok(GrantShape::Erc20),
            "erc1155" => Ok(GrantShape::Erc1155),
            _ => Err(RegistryError::UnknownShape(s.to_string())),
        }
    }
}
