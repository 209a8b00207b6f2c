pub mod error;
pub mod hashing;

pub use error::{Error, KeyError, Result};
pub use hashing::{ChainedTable, ChainedTableBuilder, DuplicatePolicy};
