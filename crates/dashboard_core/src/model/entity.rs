//! Generic record contract shared by every CRUD page.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Record identifier. Seeds use small integers, new records use epoch millis.
pub type RecordId = i64;

/// Closed categorical status attached to a record.
///
/// `ALL[0]` is the default offered by a fresh form.
pub trait Status: Copy + Eq + Debug + 'static {
    const ALL: &'static [Self];

    /// Human-facing label, identical to the persisted value.
    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.label() == label)
    }
}

/// A record type managed by one `EntityStore`.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned {
    type Status: Status;

    /// Medium key holding the JSON array of this record type.
    const STORAGE_KEY: &'static str;
    /// Placeholder shown instead of an empty table.
    const EMPTY_MESSAGE: &'static str;

    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);
    fn status(&self) -> Self::Status;

    /// Text fields matched by the search query.
    fn search_fields(&self) -> Vec<&str>;

    /// Short name used in delete confirmations.
    fn display_name(&self) -> &str;

    /// Records used when the medium holds nothing usable.
    fn seed() -> Vec<Self>;
}
