//! Error types for the wrapper layer.

use thiserror::Error;

use h5object_native::{ObjectKind, TypeClass};

/// Errors surfaced by the wrapper objects.
///
/// Every failure the native library signals through sentinel handles or
/// negative statuses is promoted to one of these variants, so callers
/// can tell a genuinely empty value from a failed operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The named resource could not be opened under its parent.
    #[error("resource not found: {name}")]
    ResourceNotFound {
        /// Name that failed to resolve.
        name: String,
    },
    /// Operation on a handle that is closed or was never opened.
    #[error("handle is closed")]
    HandleClosed,
    /// The stored type class does not support the requested operation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Class the operation requires.
        expected: TypeClass,
        /// Class the library reported.
        actual: TypeClass,
    },
    /// The library failed to produce metadata for the resource.
    #[error("metadata query failed for {name}")]
    MetadataQueryFailed {
        /// Name of the resource the query was about.
        name: String,
    },
    /// The library reported a read failure.
    #[error("read failed for {name}")]
    ReadFailed {
        /// Name of the resource being read.
        name: String,
    },
    /// Conversion from a generic object of the wrong kind.
    #[error("invalid source kind: expected {expected}, got {actual}")]
    InvalidSourceKind {
        /// Kind the conversion requires.
        expected: ObjectKind,
        /// Kind the object actually has.
        actual: ObjectKind,
    },
    /// The object has no name or parent to re-open an independent
    /// handle from.
    #[error("cannot re-open {name:?} independently")]
    NotReopenable {
        /// Name of the object, possibly empty.
        name: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
