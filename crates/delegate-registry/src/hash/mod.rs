//! Addressing — fingerprints and the storage locations derived from them.
//!
//! Both engines are pure functions of their inputs. Callers may compute a
//! location from a fingerprint they already hold, or straight from grant
//! arguments; the two routes always agree.

pub mod fingerprint;
pub mod location;

pub use fingerprint::{fingerprint, shape_of, Fingerprint};
pub use location::{location, Location};
