//! Error types for the identifier core.

use std::fmt;

use thiserror::Error;

use crate::ports::BoxError;

/// Which side of the storage boundary failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    /// Reading or decoding the persisted record.
    Read,
    /// Writing a new record.
    Write,
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Errors raised by [`IdentifierStore`](crate::store::IdentifierStore).
///
/// There is a single kind: the persisted record could not be reached. The
/// service recovers from it locally, so it never crosses a protocol binding.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage could not be read, written, or held an unusable record.
    #[error("installation record storage unavailable ({operation} at {location}): {source}")]
    StorageUnavailable {
        /// The operation that failed.
        operation: StorageOperation,
        /// Where the record lives.
        location: String,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    /// Returns the operation that failed.
    #[must_use]
    pub fn operation(&self) -> StorageOperation {
        match self {
            Self::StorageUnavailable { operation, .. } => *operation,
        }
    }
}
