pub mod chained;
pub mod polynomial;

// Re-export the table and its configuration
pub use chained::{ChainedTable, ChainedTableBuilder, DuplicatePolicy};

// Re-export the hash function
pub use polynomial::{bucket_index, polynomial_hash};
