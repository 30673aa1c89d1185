//! Generic write-through entity store.
//!
//! # Responsibility
//! - Own the ordered in-memory sequence of one record type.
//! - Mirror the full sequence to the medium after every commit.
//!
//! # Invariants
//! - At most one record per id.
//! - The in-memory sequence is authoritative; the medium is read only by
//!   `load*` and written after every commit.
//! - Commits on a missing id change nothing and are not errors.
//! - A failed mirror write is reported through `Commit::persisted` only.

mod id;

pub use id::{ClockIdSource, IdSource, SequenceIdSource};

use crate::model::entity::{Entity, RecordId};
use crate::persistence::PersistenceBridge;
use crate::storage::KeyValueStore;
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Outcome of one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// Whether the in-memory sequence changed.
    pub applied: bool,
    /// Whether the follow-up mirror write succeeded.
    pub persisted: bool,
    /// Id of the record added, edited or deleted, when one matched.
    pub id: Option<RecordId>,
}

pub struct EntityStore<'s, T: Entity, S: KeyValueStore + ?Sized> {
    key: String,
    records: Vec<T>,
    bridge: PersistenceBridge<'s, S>,
    ids: Box<dyn IdSource>,
}

impl<'s, T: Entity, S: KeyValueStore + ?Sized> EntityStore<'s, T, S> {
    /// Loads `T::STORAGE_KEY`, falling back to `T::seed()`.
    pub fn load(storage: &'s S) -> Self {
        Self::load_with_key(storage, T::STORAGE_KEY, T::seed())
    }

    /// Loads the sequence stored under `key`, or keeps `defaults` unchanged
    /// when it is missing or unparseable. Defaults are not written back until
    /// the first commit.
    ///
    /// Records are decoded one at a time: an undecodable record is skipped,
    /// and only the first record for each id is kept.
    pub fn load_with_key(storage: &'s S, key: impl Into<String>, defaults: Vec<T>) -> Self {
        let key = key.into();
        let bridge = PersistenceBridge::new(storage);
        let records = match bridge
            .load::<Vec<Value>>(&key)
            .and_then(|raw| decode_records(&key, raw))
        {
            Some(records) => {
                info!(
                    "event=store_load module=store status=ok key={key} records={}",
                    records.len()
                );
                records
            }
            None => {
                info!(
                    "event=store_load module=store status=fallback key={key} records={}",
                    defaults.len()
                );
                defaults
            }
        };

        Self {
            key,
            records,
            bridge,
            ids: Box::new(ClockIdSource::default()),
        }
    }

    /// Replaces the id generator.
    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends `record` under a fresh id, ignoring whatever id it carried.
    pub fn commit_add(&mut self, mut record: T) -> Commit {
        let id = self.fresh_id();
        record.set_id(id);
        self.records.push(record);
        debug!(
            "event=store_commit module=store status=ok op=add key={} id={id}",
            self.key
        );
        self.finish(true, Some(id))
    }

    /// Replaces the record whose id equals `record.id()`.
    pub fn commit_edit(&mut self, record: T) -> Commit {
        let id = record.id();
        match self.position(id) {
            Some(index) => {
                self.records[index] = record;
                debug!(
                    "event=store_commit module=store status=ok op=edit key={} id={id}",
                    self.key
                );
                self.finish(true, Some(id))
            }
            None => {
                debug!(
                    "event=store_commit module=store status=miss op=edit key={} id={id}",
                    self.key
                );
                self.finish(false, None)
            }
        }
    }

    /// Removes the record with `id`.
    pub fn commit_delete(&mut self, id: RecordId) -> Commit {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                debug!(
                    "event=store_commit module=store status=ok op=delete key={} id={id}",
                    self.key
                );
                self.finish(true, Some(id))
            }
            None => {
                debug!(
                    "event=store_commit module=store status=miss op=delete key={} id={id}",
                    self.key
                );
                self.finish(false, None)
            }
        }
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn fresh_id(&mut self) -> RecordId {
        loop {
            let id = self.ids.next_id();
            if !self.contains(id) {
                return id;
            }
        }
    }

    // Misses mirror too.
    fn finish(&self, applied: bool, id: Option<RecordId>) -> Commit {
        let persisted = self.bridge.save(&self.key, &self.records);
        if !persisted {
            warn!(
                "event=store_mirror module=store status=error key={} records={}",
                self.key,
                self.records.len()
            );
        }
        Commit {
            applied,
            persisted,
            id,
        }
    }
}

/// `None` when a non-empty sequence yields no usable record.
fn decode_records<T: Entity>(key: &str, raw: Vec<Value>) -> Option<Vec<T>> {
    let total = raw.len();
    let mut seen = HashSet::with_capacity(total);
    let mut records = Vec::with_capacity(total);
    for (index, value) in raw.into_iter().enumerate() {
        let record = match serde_json::from_value::<T>(value) {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=skip reason=decode key={key} index={index} error={err}"
                );
                continue;
            }
        };
        if !seen.insert(record.id()) {
            warn!(
                "event=store_load module=store status=skip reason=duplicate_id key={key} index={index} id={}",
                record.id()
            );
            continue;
        }
        records.push(record);
    }

    if records.is_empty() && total > 0 {
        return None;
    }
    Some(records)
}
