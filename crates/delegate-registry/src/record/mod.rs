//! Record layer — fixed-shape grant records under computed locations.
//!
//! - [`cell`] — the cell-index mapping and word conversions.
//! - [`store`] — the schema-less [`RecordStore`] and its in-memory backend.
//! - [`delegation`] — reconstruction of [`DelegationRecord`]s from cells.

pub mod cell;
pub mod delegation;
pub mod store;

pub use cell::{Record, RecordCell, CELL_COUNT};
pub use delegation::DelegationRecord;
pub use store::{MemoryRecordStore, RecordStore};
