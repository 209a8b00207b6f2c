//! Error types shared across the crate.

use std::collections::TryReserveError;

use thiserror::Error;

/// Why a key was refused by [`ChainedTable::insert`](crate::ChainedTable::insert).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The key has no characters.
    #[error("key is empty")]
    Empty,

    /// The key is longer than the table's configured maximum.
    #[error("key is {len} bytes long, maximum is {max}")]
    TooLong {
        /// Length of the rejected key in bytes.
        len: usize,
        /// Configured maximum key length in bytes.
        max: usize,
    },
}

/// Main error type for table operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key was rejected; the table is unchanged.
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// A table must start with at least one bucket.
    #[error("initial capacity must be greater than zero")]
    ZeroCapacity,

    /// Doubling the bucket count would overflow `usize`.
    #[error("capacity overflow: cannot grow beyond {capacity} buckets")]
    CapacityOverflow {
        /// Bucket count at the time growth was attempted.
        capacity: usize,
    },

    /// Reserving memory for buckets, nodes or key storage failed.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
