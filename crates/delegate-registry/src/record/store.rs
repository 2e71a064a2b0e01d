//! Record store — keyed cell access by location.
//!
//! The store enforces no schema. It reads and writes individual words at
//! `(location, cell)`; what those words mean is entirely the registry's
//! business.

use std::collections::HashMap;

use alloy_primitives::B256;

use crate::hash::Location;

use super::cell::{Record, RecordCell};

/// Schema-less cell storage addressed by [`Location`].
pub trait RecordStore {
    /// Read one cell. Unwritten cells read as zero.
    fn load(&self, location: &Location, cell: RecordCell) -> B256;

    /// Write one cell.
    fn store(&mut self, location: &Location, cell: RecordCell, value: B256);

    /// Read all six cells at `location`.
    fn load_record(&self, location: &Location) -> Record {
        let mut record = Record::default();
        for cell in RecordCell::ALL {
            record.set_word(cell, self.load(location, cell));
        }
        record
    }
}

/// In-memory sparse store.
///
/// Records whose cells are all zero are dropped from the map, so an
/// enable/disable cycle leaves no residue.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: HashMap<Location, Record>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously exported records.
    pub fn from_records(records: impl IntoIterator<Item = (Location, Record)>) -> Self {
        let records = records
            .into_iter()
            .filter(|(_, record)| !record.is_empty())
            .collect();
        Self { records }
    }

    /// All non-empty records, sorted by location.
    pub fn records(&self) -> Vec<(Location, Record)> {
        let mut out: Vec<(Location, Record)> =
            self.records.iter().map(|(loc, rec)| (*loc, *rec)).collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Number of non-empty records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` when no record holds a non-zero cell.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self, location: &Location, cell: RecordCell) -> B256 {
        self.records
            .get(location)
            .map(|record| record.word(cell))
            .unwrap_or(B256::ZERO)
    }

    fn store(&mut self, location: &Location, cell: RecordCell, value: B256) {
        if value.is_zero() {
            if let Some(record) = self.records.get_mut(location) {
                record.set_word(cell, value);
                if record.is_empty() {
                    self.records.remove(location);
                }
            }
            return;
        }
        self.records
            .entry(*location)
            .or_default()
            .set_word(cell, value);
    }

    fn load_record(&self, location: &Location) -> Record {
        self.records.get(location).copied().unwrap_or_default()
    }
}
