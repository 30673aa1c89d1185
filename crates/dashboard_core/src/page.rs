//! Interaction state of one CRUD list page.
//!
//! # Responsibility
//! - Compose store, search/status criteria, form buffer and delete
//!   confirmation the way every list page drives them.
//!
//! # Invariants
//! - At most one form and one pending delete exist at a time.
//! - Only `save_form` and `confirm_delete` reach the store.

use crate::form::{FormBuffer, FormRecord};
use crate::model::entity::{Entity, RecordId};
use crate::storage::KeyValueStore;
use crate::store::{Commit, EntityStore};
use crate::view::{filter_records, FilteredView, StatusFilter};
use chrono::NaiveDate;

pub struct CrudPage<'s, T: FormRecord, S: KeyValueStore + ?Sized> {
    store: EntityStore<'s, T, S>,
    query: String,
    status_filter: StatusFilter<T::Status>,
    form: Option<FormBuffer<T>>,
    pending_delete: Option<RecordId>,
}

impl<'s, T: FormRecord, S: KeyValueStore + ?Sized> CrudPage<'s, T, S> {
    /// Opens the page over `T`'s default key and seed records.
    pub fn open(storage: &'s S) -> Self {
        Self::from_store(EntityStore::load(storage))
    }

    pub fn from_store(store: EntityStore<'s, T, S>) -> Self {
        Self {
            store,
            query: String::new(),
            status_filter: StatusFilter::All,
            form: None,
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &EntityStore<'s, T, S> {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn status_filter(&self) -> StatusFilter<T::Status> {
        self.status_filter
    }

    pub fn set_status_filter(&mut self, status_filter: StatusFilter<T::Status>) {
        self.status_filter = status_filter;
    }

    /// Rows to display under the current criteria.
    pub fn view(&self) -> FilteredView<'_, T> {
        filter_records(self.store.records(), &self.query, &self.status_filter)
    }

    /// Starts an add form, replacing any open form.
    pub fn begin_create(&mut self, today: NaiveDate) -> &mut FormBuffer<T> {
        self.form.insert(FormBuffer::open_for_create(today))
    }

    /// Starts an edit form for `id`. Returns `None` when no such record exists.
    pub fn begin_edit(&mut self, id: RecordId) -> Option<&mut FormBuffer<T>> {
        let buffer = FormBuffer::open_for_edit(self.store.get(id)?);
        Some(self.form.insert(buffer))
    }

    pub fn form(&self) -> Option<&FormBuffer<T>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormBuffer<T>> {
        self.form.as_mut()
    }

    /// Commits and closes the open form. `None` when no form is open.
    pub fn save_form(&mut self) -> Option<Commit> {
        let buffer = self.form.take()?;
        Some(buffer.commit(&mut self.store))
    }

    pub fn cancel_form(&mut self) {
        if let Some(buffer) = self.form.take() {
            buffer.cancel();
        }
    }

    /// Asks for confirmation before deleting `id`; returns the dialog title.
    pub fn request_delete(&mut self, id: RecordId) -> Option<String> {
        let title = delete_title(self.store.get(id)?);
        self.pending_delete = Some(id);
        Some(title)
    }

    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    /// Deletes the pending record. `None` when nothing was pending.
    pub fn confirm_delete(&mut self) -> Option<Commit> {
        let id = self.pending_delete.take()?;
        Some(self.store.commit_delete(id))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

fn delete_title<T: Entity>(record: &T) -> String {
    format!("Delete \"{}\"?", record.display_name())
}
