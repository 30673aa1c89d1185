//! Pure display projection over an entity sequence.
//!
//! # Invariants
//! - Never mutates or reorders its input.
//! - An empty result is a normal value; callers show
//!   [`FilteredView::placeholder`] instead of an empty table.

use crate::model::entity::{Entity, RecordId, Status};

/// Categorical status criterion. `All` disables the criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Status> StatusFilter<S> {
    pub const ALL_LABEL: &'static str = "All";

    /// Parses a filter dropdown value: `"All"` or a status label.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(Self::All);
        }
        S::from_label(label).map(Self::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(status) => status.label(),
        }
    }

    pub fn matches(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

/// Ordered subsequence selected by [`filter_records`].
#[derive(Debug)]
pub struct FilteredView<'a, T> {
    rows: Vec<&'a T>,
}

impl<'a, T: Entity> FilteredView<'a, T> {
    pub fn rows(&self) -> &[&'a T] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.rows.iter().copied()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|record| record.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "No data" message to render when nothing matched.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(T::EMPTY_MESSAGE)
    }
}

/// Selects records whose search fields contain `query` case-insensitively
/// (any field) and whose status passes `status`.
pub fn filter_records<'a, T: Entity>(
    records: &'a [T],
    query: &str,
    status: &StatusFilter<T::Status>,
) -> FilteredView<'a, T> {
    let needle = query.to_lowercase();
    let rows = records
        .iter()
        .filter(|record| status.matches(record.status()))
        .filter(|record| matches_query(*record, &needle))
        .collect();
    FilteredView { rows }
}

fn matches_query<T: Entity>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}
