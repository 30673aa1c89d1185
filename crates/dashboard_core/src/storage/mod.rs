//! String key-value medium port and adapters.
//!
//! # Responsibility
//! - Define the capability every store persists through (`KeyValueStore`).
//! - Provide an in-process adapter and a durable SQLite adapter.
//!
//! # Invariants
//! - Values are opaque strings; encoding is the caller's concern.
//! - A rejected write leaves the previous value for that key untouched.
//! - Quota accounting counts key bytes plus value bytes of every entry.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a key-value medium.
#[derive(Debug)]
pub enum StorageError {
    /// The write would push the medium over its configured capacity.
    QuotaExceeded {
        key: String,
        required_bytes: u64,
        quota_bytes: u64,
    },
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                required_bytes,
                quota_bytes,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required_bytes} bytes needed, {quota_bytes} allowed"
            ),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::QuotaExceeded { .. } => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string key-value medium.
///
/// Methods take `&self`: several stores share one medium, each under its own key.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str) -> StorageResult<()>;
    fn clear(&self) -> StorageResult<()>;
    fn keys(&self) -> StorageResult<Vec<String>>;
}

pub(crate) fn entry_size(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}
