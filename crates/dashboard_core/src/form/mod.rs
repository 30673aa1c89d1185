//! Transient single-record edit state.
//!
//! # Responsibility
//! - Hold a draft record detached from any store until committed.
//! - Apply text input field-by-field with numeric coercion.
//!
//! # Invariants
//! - Opening, editing or cancelling a buffer never touches a store.
//! - A create-mode draft never carries an id into the store; one is assigned
//!   by `EntityStore::commit_add`.
//! - An edit-mode draft keeps the id it was opened with; `id` is not a
//!   settable field.
//! - Coercion failures become invalid values, never errors.

pub mod coerce;

use crate::model::entity::{Entity, RecordId, Status};
use crate::storage::KeyValueStore;
use crate::store::{Commit, EntityStore};
use chrono::{NaiveDate, Utc};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level rejection raised by [`FormBuffer::set_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownField(String),
    /// Value is not one of the field's choices.
    InvalidChoice { field: String, value: String },
}

impl FieldError {
    /// Resolves a status label or reports it as an invalid choice.
    pub fn parse_status<S: Status>(field: &str, value: &str) -> Result<S, Self> {
        S::from_label(value).ok_or_else(|| Self::InvalidChoice {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(field) => write!(f, "unknown form field `{field}`"),
            Self::InvalidChoice { field, value } => {
                write!(f, "`{value}` is not a valid choice for `{field}`")
            }
        }
    }
}

impl Error for FieldError {}

/// A record type that can be edited through a [`FormBuffer`].
pub trait FormRecord: Entity {
    /// Settable field names, in display order. [`FormBuffer::set_field`]
    /// rejects any other name before `apply_field` sees it.
    const FIELDS: &'static [&'static str];

    /// Empty draft: `today` for date fields, first status, unset numbers.
    fn blank(today: NaiveDate) -> Self;

    /// Replaces one field from text input, including any dependent fields.
    fn apply_field(&mut self, name: &str, value: &str) -> Result<(), FieldError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone)]
pub struct FormBuffer<T> {
    mode: FormMode,
    draft: T,
}

impl<T: FormRecord> FormBuffer<T> {
    pub fn open_for_create(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            draft: T::blank(today),
        }
    }

    /// [`Self::open_for_create`] using the current UTC date.
    pub fn open_for_create_today() -> Self {
        Self::open_for_create(Utc::now().date_naive())
    }

    pub fn open_for_edit(record: &T) -> Self {
        Self {
            mode: FormMode::Edit(record.id()),
            draft: record.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        if !T::FIELDS.contains(&name) {
            return Err(FieldError::UnknownField(name.to_string()));
        }
        self.draft.apply_field(name, value)
    }

    /// Hands the draft to `store` and consumes the buffer.
    pub fn commit<S: KeyValueStore + ?Sized>(self, store: &mut EntityStore<'_, T, S>) -> Commit {
        let mut draft = self.draft;
        match self.mode {
            FormMode::Create => {
                draft.set_id(RecordId::default());
                store.commit_add(draft)
            }
            FormMode::Edit(_) => store.commit_edit(draft),
        }
    }

    /// Abandons the draft without touching any store.
    pub fn cancel(self) {
        let mode = match self.mode {
            FormMode::Create => "create",
            FormMode::Edit(_) => "edit",
        };
        debug!(
            "event=form_cancel module=form status=ok key={} mode={mode}",
            T::STORAGE_KEY
        );
    }
}
