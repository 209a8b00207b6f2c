//! # Separate Chaining Hash Table
//!
//! This module implements [`ChainedTable`], a hash table from **string keys** (typically street
//! addresses) to arbitrary records, using **separate chaining** for collision resolution.
//! It supports:
//! - **Insert** and **get** with expected **O(1)** cost per operation.
//! - **Automatic growth**: before a new entry is placed, a table holding as many entries as it has
//!   buckets doubles its bucket count and rehashes every entry.
//! - **Configurable** initial capacity, maximum key length and duplicate-key policy through
//!   [`ChainedTableBuilder`].
//! - **Fallible allocation**: bucket storage, chain nodes and key copies are reserved with
//!   `try_reserve`, so running out of memory is reported as [`Error::OutOfMemory`] instead of aborting.
//!
//! Chain nodes live in a single arena owned by the table and link to each other by index. A new
//! node is always placed at the **head** of its bucket's chain, so lookups see the most recently
//! inserted entry first. Under the default [`DuplicatePolicy::Shadow`], inserting an existing key
//! adds a second node that hides the first; [`DuplicatePolicy::Replace`] overwrites in place instead.
//!
//! There is no removal and no iteration. The table is **not** thread-safe; wrap it in a lock if it
//! must be shared.
//!
//! ## Example
//! ```rust
//! use chaintable::ChainedTable;
//!
//! let mut houses = ChainedTable::with_capacity(10)?;
//! houses.insert("123 Main St", 1)?;
//! houses.insert("456 Oak Ave", 2)?;
//! assert_eq!(houses.get("456 Oak Ave"), Some(&2));
//! assert_eq!(houses.get("999 Nowhere"), None);
//! # Ok::<(), chaintable::Error>(())
//! ```

use log::{debug, trace};

use super::polynomial::bucket_index;
use crate::error::{Error, KeyError, Result};

/// Default initial capacity if none specified.
const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Index of a node in the table's arena.
type NodeId = usize;

/// What [`ChainedTable::insert`] does with a key that is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Add a new node in front of the old one. Lookups return the newest value; older values stay
    /// in the chain and still count towards [`ChainedTable::len`].
    #[default]
    Shadow,
    /// Overwrite the value of the existing entry and hand back the old one.
    Replace,
}

/// A single entry in a chain.
#[derive(Debug)]
struct ChainNode<V> {
    key: String,
    value: V,
    next: Option<NodeId>,
}

/// Walks one bucket's chain from head to tail.
struct Chain<'a, V> {
    nodes: &'a [ChainNode<V>],
    cursor: Option<NodeId>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (NodeId, &'a ChainNode<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.nodes[id];
        self.cursor = node.next;
        Some((id, node))
    }
}

/// A separate-chaining hash table from string keys to values of type `V`.
#[derive(Debug)]
pub struct ChainedTable<V> {
    /// Head of each bucket's chain. Its length is the table's capacity.
    buckets: Vec<Option<NodeId>>,
    /// Every node ever inserted, in insertion order. Its length is the entry count.
    nodes: Vec<ChainNode<V>>,
    max_key_len: Option<usize>,
    duplicates: DuplicatePolicy,
}

/// A builder for the `ChainedTable`.
/// Typically you'll call `.with_capacity(...)`, `.with_duplicate_policy(...)`, etc., then `.build()`.
#[derive(Debug, Clone)]
pub struct ChainedTableBuilder {
    capacity: usize,
    max_key_len: Option<usize>,
    duplicates: DuplicatePolicy,
}

impl Default for ChainedTableBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_INITIAL_CAPACITY,
            max_key_len: None,
            duplicates: DuplicatePolicy::Shadow,
        }
    }
}

impl ChainedTableBuilder {
    /// Creates a new builder with default capacity, unbounded keys and shadowing duplicates.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the initial number of buckets. `build` rejects zero.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Rejects keys longer than `max` bytes on insert.
    pub fn with_max_key_len(mut self, max: usize) -> Self {
        assert!(max > 0, "maximum key length must be > 0");
        self.max_key_len = Some(max);
        self
    }

    /// Chooses how inserts treat keys that are already present.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Build the final `ChainedTable`.
    pub fn build<V>(self) -> Result<ChainedTable<V>> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let buckets = empty_buckets(self.capacity)?;
        debug!(
            "created chained table with {} buckets ({:?} duplicates)",
            self.capacity, self.duplicates
        );

        Ok(ChainedTable {
            buckets,
            nodes: Vec::new(),
            max_key_len: self.max_key_len,
            duplicates: self.duplicates,
        })
    }
}

/// Allocates `capacity` empty chain heads, reporting allocation failure.
fn empty_buckets(capacity: usize) -> Result<Vec<Option<NodeId>>> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(capacity)?;
    buckets.resize(capacity, None);
    Ok(buckets)
}

impl<V> ChainedTable<V> {
    /// Creates an empty table with `capacity` buckets and default settings.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        ChainedTableBuilder::new().with_capacity(capacity).build()
    }

    /// Returns the number of entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn max_key_len(&self) -> Option<usize> {
        self.max_key_len
    }

    /// Inserts `value` under `key`.
    ///
    /// Returns `Ok(None)` when a new entry was added. Under [`DuplicatePolicy::Replace`], inserting
    /// a key that is already present overwrites its value and returns `Ok(Some(old))`; this never
    /// grows the table.
    ///
    /// # Errors
    /// - [`Error::InvalidKey`] if `key` is empty or longer than the configured maximum.
    /// - [`Error::OutOfMemory`] or [`Error::CapacityOverflow`] if the entry or the grown bucket
    ///   store cannot be allocated.
    ///
    /// The table is unchanged whenever an error is returned.
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>> {
        self.check_key(key)?;

        if self.duplicates == DuplicatePolicy::Replace {
            if let Some(id) = self.find(key) {
                trace!("replacing value for key {:?}", key);
                return Ok(Some(std::mem::replace(&mut self.nodes[id].value, value)));
            }
        }

        // Reserve everything the new node needs before touching the buckets.
        let mut owned = String::new();
        owned.try_reserve_exact(key.len())?;
        owned.push_str(key);
        self.nodes.try_reserve(1)?;

        if self.nodes.len() >= self.buckets.len() {
            self.resize()?;
        }

        let index = bucket_index(key, self.buckets.len());
        self.prepend(
            index,
            ChainNode {
                key: owned,
                value,
                next: None,
            },
        );
        trace!("inserted key {:?} into bucket {}", key, index);
        Ok(None)
    }

    /// Returns a reference to the newest value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|id| &self.nodes[id].value)
    }

    /// Returns true if some entry is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    fn check_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KeyError::Empty.into());
        }
        match self.max_key_len {
            Some(max) if key.len() > max => Err(KeyError::TooLong {
                len: key.len(),
                max,
            }
            .into()),
            _ => Ok(()),
        }
    }

    /// First node in `key`'s chain holding exactly `key`.
    fn find(&self, key: &str) -> Option<NodeId> {
        self.chain(bucket_index(key, self.buckets.len()))
            .find(|(_, node)| node.key == key)
            .map(|(id, _)| id)
    }

    fn chain(&self, index: usize) -> Chain<'_, V> {
        Chain {
            nodes: &self.nodes,
            cursor: self.buckets[index],
        }
    }

    /// Pushes `node` into the arena and links it at the head of bucket `index`.
    /// The arena must already have room for one more node.
    fn prepend(&mut self, index: usize, mut node: ChainNode<V>) {
        node.next = self.buckets[index];
        let id = self.nodes.len();
        self.nodes.push(node);
        self.buckets[index] = Some(id);
    }

    /// Doubles the bucket count and relinks every node under the new capacity.
    ///
    /// Old buckets are visited in ascending order and each chain head to tail. Nodes are appended
    /// to their new chain, which keeps the relative order of every chain: doubling only ever splits
    /// bucket `j` into `j` and `j + old_capacity`.
    fn resize(&mut self) -> Result<()> {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .ok_or(Error::CapacityOverflow {
                capacity: old_capacity,
            })?;
        let mut buckets = empty_buckets(new_capacity)?;
        let mut tails = empty_buckets(new_capacity)?;

        let mut rehashed = 0;
        for slot in 0..old_capacity {
            let mut cursor = self.buckets[slot];
            while let Some(id) = cursor {
                let node = &mut self.nodes[id];
                cursor = node.next.take();
                let index = bucket_index(&node.key, new_capacity);
                match tails[index] {
                    Some(tail) => self.nodes[tail].next = Some(id),
                    None => buckets[index] = Some(id),
                }
                tails[index] = Some(id);
                rehashed += 1;
            }
        }
        debug_assert_eq!(rehashed, self.nodes.len());

        debug!(
            "resized chained table from {} to {} buckets, rehashed {} entries",
            old_capacity, new_capacity, rehashed
        );
        self.buckets = buckets;
        Ok(())
    }
}
