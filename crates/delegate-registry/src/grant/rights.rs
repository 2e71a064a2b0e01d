//! Rights labels — opaque 32-byte sub-delegation scopes.
//!
//! The all-zero value is the wildcard: a grant made with wildcard rights
//! satisfies a check for any rights label. Human-readable labels such as
//! `"governance"` are right-padded with zero bytes, the same way a short
//! string literal fills a `bytes32`.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Maximum label length in bytes.
pub const MAX_LABEL_LEN: usize = 32;

/// An opaque rights label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rights(pub B256);

impl Rights {
    /// The wildcard scope.
    pub const WILDCARD: Rights = Rights(B256::ZERO);

    /// Build rights from a UTF-8 label of at most 32 bytes.
    ///
    /// The empty label is the wildcard.
    pub fn from_label(label: &str) -> Result<Self> {
        let bytes = label.as_bytes();
        if bytes.len() > MAX_LABEL_LEN {
            return Err(RegistryError::InvalidRights(format!(
                "label '{label}' is {} bytes, max {MAX_LABEL_LEN}",
                bytes.len()
            )));
        }
        let mut word = [0u8; 32];
        word[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(B256::from(word)))
    }

    /// Is this the wildcard scope?
    pub fn is_wildcard(&self) -> bool {
        self.0.is_zero()
    }

    /// The raw 32-byte word.
    pub fn as_word(&self) -> B256 {
        self.0
    }

    /// Recover a printable label, if the word is printable ASCII followed
    /// only by zero padding.
    pub fn label(&self) -> Option<String> {
        let bytes = self.0.as_slice();
        let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
        let (text, padding) = bytes.split_at(end);
        if padding.iter().any(|b| *b != 0) {
            return None;
        }
        if !text.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            return None;
        }
        Some(String::from_utf8_lossy(text).into_owned())
    }
}

impl From<B256> for Rights {
    fn from(word: B256) -> Self {
        Self(word)
    }
}

impl std::fmt::Display for Rights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_wildcard() {
            return f.write_str("*");
        }
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "0x{}", hex::encode(self.0)),
        }
    }
}

impl std::str::FromStr for Rights {
    type Err = RegistryError;

    /// Accepts `*` or the empty string (wildcard), a `0x`-prefixed 64-digit
    /// hex word, or a plain label.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == "*" {
            return Ok(Self::WILDCARD);
        }
        if let Some(digits) = s.strip_prefix("0x") {
            if digits.len() == 64 {
                let bytes = hex::decode(digits)
                    .map_err(|e| RegistryError::InvalidRights(format!("{s}: {e}")))?;
                return Ok(Self(B256::from_slice(&bytes)));
            }
        }
        Self::from_label(s)
    }
}
