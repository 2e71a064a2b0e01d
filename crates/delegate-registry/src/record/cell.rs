//! Record cells — the fixed six-slot layout of a stored grant.
//!
//! Every cell is an untyped 32-byte word. [`RecordCell`] is the single
//! mapping from meaning to index, and [`Record`]'s typed accessors are the
//! only conversions between words and addresses/amounts. Nothing else in
//! the crate indexes a record by number.

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Number of cells in a record.
pub const CELL_COUNT: usize = 6;

/// Meaning of each record cell, in storage order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCell {
    Delegate = 0,
    Vault = 1,
    Rights = 2,
    Contract = 3,
    Balance = 4,
    TokenId = 5,
}

impl RecordCell {
    /// All cells in storage order.
    pub const ALL: [RecordCell; CELL_COUNT] = [
        RecordCell::Delegate,
        RecordCell::Vault,
        RecordCell::Rights,
        RecordCell::Contract,
        RecordCell::Balance,
        RecordCell::TokenId,
    ];

    /// Offset of this cell from the record's location.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordCell::Delegate => "delegate",
            RecordCell::Vault => "vault",
            RecordCell::Rights => "rights",
            RecordCell::Contract => "contract",
            RecordCell::Balance => "balance",
            RecordCell::TokenId => "token_id",
        }
    }
}

/// Six contiguous 32-byte cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub [B256; CELL_COUNT]);

impl Record {
    /// Raw word in `cell`.
    pub fn word(&self, cell: RecordCell) -> B256 {
        self.0[cell.index()]
    }

    /// Overwrite `cell` with a raw word.
    pub fn set_word(&mut self, cell: RecordCell, value: B256) {
        self.0[cell.index()] = value;
    }

    /// Interpret `cell` as a left-padded address.
    pub fn address(&self, cell: RecordCell) -> Address {
        word_to_address(self.word(cell))
    }

    /// Interpret `cell` as a big-endian amount.
    pub fn amount(&self, cell: RecordCell) -> U256 {
        word_to_amount(self.word(cell))
    }

    /// True when every cell is zero.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| w.is_zero())
    }
}

/// Encode an address into a cell word.
pub fn address_to_word(address: Address) -> B256 {
    address.into_word()
}

/// Decode a cell word into an address.
pub fn word_to_address(word: B256) -> Address {
    Address::from_word(word)
}

/// Encode an amount into a cell word.
pub fn amount_to_word(amount: U256) -> B256 {
    B256::from(amount.to_be_bytes::<32>())
}

/// Decode a cell word into an amount.
pub fn word_to_amount(word: B256) -> U256 {
    U256::from_be_bytes(word.0)
}
