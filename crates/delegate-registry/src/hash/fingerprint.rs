//! Fingerprint engine — content-addressed grant identifiers.
//!
//! A fingerprint is `keccak256` over the 32-byte words
//! `rights ‖ vault ‖ delegate [‖ contract] [‖ token_id]`, with its
//! low-order byte (index 31) overwritten by the grant shape's tag. The tag
//! keeps the five shapes in disjoint halves of one address space; the
//! hash keeps grants of the same shape apart.

use alloy_primitives::{keccak256, Address, B256};
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::grant::{GrantShape, Rights, Scope};

/// Index of the byte carrying the shape tag.
const TAG_BYTE: usize = 31;

/// Type-tagged 32-byte grant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub B256);

impl Fingerprint {
    /// Fingerprint the grant `vault` → `delegate` over `scope` under `rights`.
    pub fn compute(scope: &Scope, vault: Address, delegate: Address, rights: Rights) -> Self {
        let mut preimage = Vec::with_capacity(32 * 5);
        preimage.extend_from_slice(rights.as_word().as_slice());
        preimage.extend_from_slice(vault.into_word().as_slice());
        preimage.extend_from_slice(delegate.into_word().as_slice());
        if let Some(contract) = scope.contract() {
            preimage.extend_from_slice(contract.into_word().as_slice());
        }
        if let Some(token_id) = scope.token_id() {
            preimage.extend_from_slice(&token_id.to_be_bytes::<32>());
        }

        let mut word = keccak256(&preimage);
        word[TAG_BYTE] = scope.shape().tag();
        Self(word)
    }

    /// The raw tag byte.
    pub fn tag(&self) -> u8 {
        self.0[TAG_BYTE]
    }

    /// The grant shape encoded in the tag.
    ///
    /// Always succeeds for fingerprints produced by [`Fingerprint::compute`].
    pub fn shape(&self) -> Result<GrantShape> {
        GrantShape::try_from(self.tag())
    }

    /// The raw 32-byte word.
    pub fn as_word(&self) -> B256 {
        self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for Fingerprint {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits)
            .map_err(|e| RegistryError::InvalidFingerprint(format!("{s}: {e}")))?;
        if bytes.len() != 32 {
            return Err(RegistryError::InvalidFingerprint(format!(
                "{s}: expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(B256::from_slice(&bytes)))
    }
}

/// Free-function form of [`Fingerprint::compute`].
pub fn fingerprint(scope: &Scope, vault: Address, delegate: Address, rights: Rights) -> Fingerprint {
    Fingerprint::compute(scope, vault, delegate, rights)
}

/// Extract the shape from any fingerprint: `tag = fingerprint & 0xff`.
pub fn shape_of(fingerprint: &Fingerprint) -> Result<GrantShape> {
    fingerprint.shape()
}
