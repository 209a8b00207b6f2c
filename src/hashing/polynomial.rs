//! # Polynomial String Hash
//!
//! This module implements the **base-31 polynomial hash** used by [`ChainedTable`](super::ChainedTable)
//! to spread string keys across its buckets.
//!
//! ## Key Features
//! - **32-bit signed** accumulator: `h = h * 31 + byte` for every UTF-8 byte of the key, with
//!   two's-complement **wraparound** on overflow. The wraparound pattern is part of the hash, so the
//!   width is fixed at `i32` on every platform.
//! - Bytes are fed as **unsigned** values (`0..=255`), so non-ASCII keys hash identically everywhere.
//! - **Non-negative** bucket indices: the accumulator is reduced with a Euclidean remainder, so a
//!   negative hash still lands in `[0, capacity)`.
//!
//! **Note**: This is **not** resistant to adversarial keys. Colliding keys are trivial to construct;
//! the table only relies on reasonable spread for ordinary addresses.

/// Multiplier applied to the running hash before each byte is added.
pub const MULTIPLIER: i32 = 31;

/// Computes the raw 32-bit polynomial hash of `key`.
///
/// ```rust
/// use chaintable::hashing::polynomial::polynomial_hash;
///
/// assert_eq!(polynomial_hash("abc"), 96354);
/// assert_eq!(polynomial_hash(""), 0);
/// ```
pub fn polynomial_hash(key: &str) -> i32 {
    key.bytes().fold(0i32, |running, b| {
        running.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(b))
    })
}

/// Maps `key` to a bucket index in `[0, capacity)`.
///
/// # Panics
/// - if `capacity == 0`.
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    reduce(polynomial_hash(key), capacity)
}

/// Euclidean remainder of `hash` by `capacity`. Widened to `i128` so any `usize` capacity is exact.
fn reduce(hash: i32, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be > 0");
    let index = i128::from(hash).rem_euclid(capacity as i128);
    // 0 <= index < capacity, so this never truncates.
    index as usize
}
