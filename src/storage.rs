//! Local key-value persistence.
//!
//! The catalog is stored as opaque blobs under fixed keys. Two stores
//! implement [`KeyValueStore`]:
//!
//! - [`SqliteStore`]: a single `SQLite` file with one `kv` table.
//! - [`MemoryStore`]: a map in memory, for tests.

#[cfg(test)]
mod memory;
mod sqlite;

use std::io;

use jiff::Timestamp;

#[cfg(test)]
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt store: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// A flat map from string keys to byte blobs.
///
/// `put` overwrites whatever was stored under the key.
pub trait KeyValueStore {
    /// Reads the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// When `key` was last written, if it exists.
    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        (**self).updated_at(key)
    }
}
