//! JSON persistence bridge over a key-value medium.
//!
//! # Responsibility
//! - Encode whole values to JSON text and write them under one key.
//! - Decode JSON text back, treating every failure as "absent".
//!
//! # Invariants
//! - No method panics or returns an error; failures are logged and reported
//!   as `false` / `None`.
//! - Writes are always full replacements; there is no partial update path.
//! - Log events carry keys and sizes only, never stored content.

use crate::storage::KeyValueStore;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Synchronous JSON adapter borrowing a shared medium.
pub struct PersistenceBridge<'s, S: KeyValueStore + ?Sized> {
    storage: &'s S,
}

impl<S: KeyValueStore + ?Sized> Clone for PersistenceBridge<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: KeyValueStore + ?Sized> Copy for PersistenceBridge<'_, S> {}

impl<'s, S: KeyValueStore + ?Sized> PersistenceBridge<'s, S> {
    pub fn new(storage: &'s S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &'s S {
        self.storage
    }

    /// Reads and decodes the value under `key`.
    ///
    /// Returns `None` for a missing key, an empty string, a medium read error
    /// or undecodable text. Only the latter two are logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.storage.get_item(key) {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                debug!("event=persist_load module=persistence status=absent key={key}");
                return None;
            }
            Err(err) => {
                error!(
                    "event=persist_load module=persistence status=error key={key} error_code=read_failed error={err}"
                );
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    "event=persist_load module=persistence status=error key={key} bytes={} error_code=parse_failed error={err}",
                    text.len()
                );
                None
            }
        }
    }

    /// Like [`Self::load`], substituting `default` when nothing usable is stored.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.load(key).unwrap_or(default)
    }

    /// Encodes `value` and replaces whatever is stored under `key`.
    ///
    /// Returns `false` when encoding fails or the medium rejects the write.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(err) => {
                error!(
                    "event=persist_save module=persistence status=error key={key} error_code=encode_failed error={err}"
                );
                return false;
            }
        };

        match self.storage.set_item(key, &text) {
            Ok(()) => {
                debug!(
                    "event=persist_save module=persistence status=ok key={key} bytes={}",
                    text.len()
                );
                true
            }
            Err(err) => {
                error!(
                    "event=persist_save module=persistence status=error key={key} bytes={} error_code=write_failed error={err}",
                    text.len()
                );
                false
            }
        }
    }

    /// Removes `key` from the medium.
    pub fn remove(&self, key: &str) -> bool {
        match self.storage.remove_item(key) {
            Ok(()) => true,
            Err(err) => {
                error!(
                    "event=persist_remove module=persistence status=error key={key} error={err}"
                );
                false
            }
        }
    }

    /// Removes every key from the medium, including ones owned by other stores.
    pub fn clear(&self) -> bool {
        match self.storage.clear() {
            Ok(()) => true,
            Err(err) => {
                error!("event=persist_clear module=persistence status=error error={err}");
                false
            }
        }
    }
}
