//! Record id generation.

use crate::model::entity::RecordId;
use chrono::Utc;

/// Source of fresh record ids.
///
/// Implementations must never return the same value twice.
pub trait IdSource {
    fn next_id(&mut self) -> RecordId;
}

/// Epoch-millisecond ids, bumped past the last issued value so that several
/// adds within one millisecond stay distinct.
#[derive(Debug, Default)]
pub struct ClockIdSource {
    last_issued: RecordId,
}

impl IdSource for ClockIdSource {
    fn next_id(&mut self) -> RecordId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last_issued.saturating_add(1));
        self.last_issued = id;
        id
    }
}

/// Counter ids starting at a fixed value. Deterministic; meant for tests and
/// imports.
#[derive(Debug)]
pub struct SequenceIdSource {
    next: RecordId,
}

impl SequenceIdSource {
    pub fn starting_at(first: RecordId) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequenceIdSource {
    fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}
