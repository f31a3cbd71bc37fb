//! Key-value persistence media
//!
//! The quote store, the category filter and the view never touch the disk
//! directly; they go through [`KeyValueStore`], so the medium can be a
//! directory on disk or an in-memory map in tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::utils::error::AppResult;

/// Durable key under which the quote list is stored
pub const QUOTES_KEY: &str = "quotes";

/// Durable key under which the last category filter is stored
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// Session key under which the last shown quote is stored
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// A string-valued key-value medium
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, `None` when absent
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite the value for `key`
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}
