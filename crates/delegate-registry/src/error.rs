//! Error types for the delegation registry.
//!
//! Core registry operations never fail: missing or disabled grants read
//! back as zero values. Errors only arise at the edges — parsing
//! user-supplied values, persistence, configuration, and lock poisoning.

/// Registry error types covering all fallible operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown grant shape tag: {0}")]
    UnknownShapeTag(u8),

    #[error("Unknown grant shape: {0}")]
    UnknownShape(String),

    #[error("Invalid rights value: {0}")]
    InvalidRights(String),

    #[error("Invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Registry lock poisoned")]
    LockPoisoned,

    #[error("Unsupported registry file version: {0}")]
    UnsupportedVersion(u32),

    #[error("Snapshot checksum mismatch: expected {expected}, actual {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, RegistryError>;
