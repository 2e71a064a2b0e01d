//! Grants — what a vault can hand to a delegate.
//!
//! The grant module provides:
//! - The five grant shapes and their fingerprint tags
//! - Rights labels with wildcard semantics
//! - Scopes carrying the identity-relevant asset fields of each shape
//! - Delegation requests, the unit of a (batched) write

pub mod request;
pub mod rights;
pub mod scope;
pub mod shape;

pub use request::DelegationRequest;
pub use rights::Rights;
pub use scope::Scope;
pub use shape::GrantShape;
