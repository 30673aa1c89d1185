use chrono::NaiveDate;
use dashboard_core::{
    Customer, CustomerStatus, Entity, EntityStore, FieldError, FormBuffer, FormMode, FormRecord,
    KeyValueStore, MemoryKeyValueStore, Order, OrderStatus, Product, ProductStatus,
    SequenceIdSource, Status,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
}

#[test]
fn open_for_create_uses_type_appropriate_defaults() {
    let order = FormBuffer::<Order>::open_for_create(today());
    assert_eq!(order.mode(), FormMode::Create);
    assert_eq!(order.draft().order_date, "2026-02-14");
    assert_eq!(order.draft().status, OrderStatus::Pending);
    assert_eq!(order.draft().total, None);

    let product = FormBuffer::<Product>::open_for_create(today());
    assert_eq!(product.draft().status, ProductStatus::InStock);
    assert_eq!(product.draft().date_added, "2026-02-14");

    let customer = FormBuffer::<Customer>::open_for_create(today());
    assert_eq!(customer.draft().total_orders, Some(0));
    assert_eq!(customer.draft().status, CustomerStatus::Active);
    assert_eq!(customer.draft().joined_date, "2026-02-14");
}

#[test]
fn setting_stock_recomputes_product_status() {
    let mut buffer = FormBuffer::<Product>::open_for_create(today());

    buffer.set_field("stock", "0").unwrap();
    assert_eq!(buffer.draft().status, ProductStatus::OutOfStock);

    buffer.set_field("stock", "12").unwrap();
    assert_eq!(buffer.draft().status, ProductStatus::InStock);

    buffer.set_field("stock", "lots").unwrap();
    assert_eq!(buffer.draft().stock, None);
    assert_eq!(buffer.draft().status, ProductStatus::OutOfStock);
}

#[test]
fn explicit_status_after_stock_wins() {
    let mut buffer = FormBuffer::<Product>::open_for_create(today());
    buffer.set_field("stock", "0").unwrap();
    buffer.set_field("status", "In Stock").unwrap();

    assert_eq!(buffer.draft().status, ProductStatus::InStock);
}

#[test]
fn unknown_field_and_invalid_choice_are_rejected() {
    let mut buffer = FormBuffer::<Order>::open_for_create(today());

    assert_eq!(
        buffer.set_field("id", "5"),
        Err(FieldError::UnknownField("id".to_string()))
    );
    assert_eq!(
        buffer.set_field("status", "Shipped"),
        Err(FieldError::InvalidChoice {
            field: "status".to_string(),
            value: "Shipped".to_string(),
        })
    );
    assert_eq!(buffer.draft().status, OrderStatus::Pending);
}

#[test]
fn create_commit_coerces_numbers_and_assigns_id() {
    let storage = MemoryKeyValueStore::new();
    let mut store = EntityStore::<Product, _>::load(&storage)
        .with_id_source(SequenceIdSource::starting_at(100));

    let mut buffer = FormBuffer::<Product>::open_for_create(today());
    buffer.set_field("name", "Desk Lamp").unwrap();
    buffer.set_field("category", "Home").unwrap();
    buffer.set_field("price", "24.50").unwrap();
    buffer.set_field("stock", "7").unwrap();
    let commit = buffer.commit(&mut store);

    assert_eq!(commit.id, Some(100));
    let added = store.records().last().unwrap();
    assert_eq!(added.id, 100);
    assert_eq!(added.name, "Desk Lamp");
    assert_eq!(added.price, Some(24.5));
    assert_eq!(added.stock, Some(7));
    assert_eq!(added.status, ProductStatus::InStock);
}

#[test]
fn non_numeric_input_is_stored_as_invalid_not_rejected() {
    let storage = MemoryKeyValueStore::new();
    let mut store = EntityStore::<Order, _>::load(&storage);

    let mut buffer = FormBuffer::<Order>::open_for_create(today());
    buffer.set_field("customerName", "Ada").unwrap();
    buffer.set_field("total", "twelve").unwrap();
    let commit = buffer.commit(&mut store);

    assert!(commit.applied && commit.persisted);
    assert_eq!(store.records().last().unwrap().total, None);

    let reloaded = EntityStore::<Order, _>::load(&storage);
    assert_eq!(reloaded.records().last().unwrap().total, None);
    assert_eq!(reloaded.len(), 4);
}

#[test]
fn edit_commit_replaces_matching_record_in_place() {
    let storage = MemoryKeyValueStore::new();
    let mut store = EntityStore::<Customer, _>::load(&storage);

    let mut buffer = FormBuffer::open_for_edit(store.get(2).unwrap());
    assert_eq!(buffer.mode(), FormMode::Edit(2));
    buffer.set_field("location", "Austin, USA").unwrap();
    buffer.set_field("status", "Inactive").unwrap();
    let commit = buffer.commit(&mut store);

    assert!(commit.applied);
    let ids: Vec<i64> = store.records().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let edited = store.get(2).unwrap();
    assert_eq!(edited.location, "Austin, USA");
    assert_eq!(edited.status, CustomerStatus::Inactive);
    assert_eq!(edited.name, "Jane Smith");
}

#[test]
fn abandoned_buffer_leaves_store_untouched() {
    let storage = MemoryKeyValueStore::new();
    let store = EntityStore::<Customer, _>::load(&storage);
    let before = store.records().to_vec();

    let mut buffer = FormBuffer::open_for_edit(store.get(1).unwrap());
    buffer.set_field("name", "Changed").unwrap();
    buffer.cancel();

    assert_eq!(store.records(), before.as_slice());
    assert!(storage.keys().unwrap().is_empty());
}

#[test]
fn edit_commit_after_record_was_deleted_is_a_silent_miss() {
    let storage = MemoryKeyValueStore::new();
    let mut store = EntityStore::<Customer, _>::load(&storage);

    let buffer = FormBuffer::open_for_edit(store.get(3).unwrap());
    store.commit_delete(3);
    let commit = buffer.commit(&mut store);

    assert!(!commit.applied);
    assert_eq!(store.len(), 2);
}

fn assert_every_listed_field_is_settable<T: FormRecord>() {
    let mut buffer = FormBuffer::<T>::open_for_create(today());
    for field in T::FIELDS {
        let value = if *field == "status" {
            <T as Entity>::Status::ALL[0].label()
        } else {
            "1"
        };
        assert_eq!(buffer.set_field(field, value), Ok(()), "field `{field}`");
    }
}

#[test]
fn every_listed_field_is_accepted() {
    assert_every_listed_field_is_settable::<Order>();
    assert_every_listed_field_is_settable::<Product>();
    assert_every_listed_field_is_settable::<Customer>();
}

#[test]
fn names_outside_the_field_list_are_rejected() {
    let mut buffer = FormBuffer::<Product>::open_for_create(today());
    let before = buffer.draft().clone();

    assert_eq!(
        buffer.set_field("id", "5"),
        Err(FieldError::UnknownField("id".to_string()))
    );
    assert_eq!(
        buffer.set_field("date_added", "2026-03-01"),
        Err(FieldError::UnknownField("date_added".to_string()))
    );
    assert_eq!(buffer.draft(), &before);
}

#[test]
fn editing_seeded_product_stock_to_zero_marks_it_out_of_stock() {
    let storage = MemoryKeyValueStore::new();
    let mut store = EntityStore::<Product, _>::load(&storage);
    let headphones = store.get(1).unwrap().clone();
    assert_eq!(headphones.status, ProductStatus::InStock);

    let mut buffer = FormBuffer::open_for_edit(&headphones);
    buffer.set_field("stock", "0").unwrap();
    assert_eq!(buffer.mode(), FormMode::Edit(1));
    assert_eq!(buffer.draft().stock, Some(0));
    assert_eq!(buffer.draft().status, ProductStatus::OutOfStock);
    assert_eq!(store.get(1).unwrap().status, ProductStatus::InStock);

    let commit = buffer.commit(&mut store);
    assert!(commit.applied);
    assert_eq!(store.get(1).unwrap().status, ProductStatus::OutOfStock);
}
