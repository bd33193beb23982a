use inventory_core::db::open_db_in_memory;
use inventory_core::{
    Column, Filter, Locator, ProductId, ProductRouter, ProductRow, ProductStore, ProductValues,
    RouterError, SqliteProductStore, StoreResult,
};
use rusqlite::types::Value;
use std::cell::Cell;

/// Store double counting every call that reaches the data layer.
#[derive(Default)]
struct CountingStore {
    calls: Cell<usize>,
}

impl ProductStore for CountingStore {
    fn query(
        &self,
        _projection: &[Column],
        _filter: Option<&Filter>,
        _order: Option<&str>,
    ) -> StoreResult<Vec<ProductRow>> {
        self.calls.set(self.calls.get() + 1);
        Ok(Vec::new())
    }

    fn insert(&self, _values: &ProductValues) -> StoreResult<ProductId> {
        self.calls.set(self.calls.get() + 1);
        Ok(1)
    }

    fn update(&self, _filter: Option<&Filter>, _values: &ProductValues) -> StoreResult<usize> {
        self.calls.set(self.calls.get() + 1);
        Ok(0)
    }

    fn delete(&self, _filter: Option<&Filter>) -> StoreResult<usize> {
        self.calls.set(self.calls.get() + 1);
        Ok(0)
    }
}

#[test]
fn insert_on_collection_returns_new_item_locator() {
    let conn = open_db_in_memory().unwrap();
    let router = ProductRouter::new(SqliteProductStore::new(&conn));

    let locator = router
        .insert(
            &Locator::Collection,
            &ProductValues::new()
                .with_name("Widget")
                .with_price(9.99)
                .with_quantity(5),
        )
        .unwrap();

    let Locator::Item(id) = locator else {
        panic!("insert should return an item locator, got {locator}");
    };

    let rows = router
        .query(&locator, &Column::ALL, None, None)
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, Some(id));
    assert_eq!(rows[0].name.as_deref(), Some("Widget"));
}

#[test]
fn insert_on_item_locator_never_reaches_the_store() {
    let router = ProductRouter::new(CountingStore::default());

    let err = router
        .insert(&Locator::Item(3), &ProductValues::new().with_name("x"))
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::UnsupportedOperation {
            operation: "insert",
            locator: Locator::Item(3),
        }
    ));
    assert_eq!(router.store().calls.get(), 0);
}

#[test]
fn insert_rejects_out_of_bounds_values_before_the_store() {
    let router = ProductRouter::new(CountingStore::default());

    let err = router
        .insert(
            &Locator::Collection,
            &ProductValues::new().with_name("x").with_quantity(101),
        )
        .unwrap_err();
    assert!(matches!(err, RouterError::Store(_)));
    assert_eq!(router.store().calls.get(), 0);
}

#[test]
fn item_query_forces_id_filter_over_caller_filter() {
    let conn = open_db_in_memory().unwrap();
    let router = ProductRouter::new(SqliteProductStore::new(&conn));

    let first = router
        .insert(&Locator::Collection, &ProductValues::new().with_name("first"))
        .unwrap();
    router
        .insert(&Locator::Collection, &ProductValues::new().with_name("second"))
        .unwrap();

    let Locator::Item(first_id) = first else {
        panic!("expected item locator");
    };

    // A filter matching the other row must be ignored for an item locator.
    let bogus = Filter::new("name = ?", vec![Value::Text("second".into())]);
    let rows = router
        .query(&first, &Column::ALL, Some(&bogus), None)
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, Some(first_id));
    assert_eq!(rows[0].name.as_deref(), Some("first"));
}

#[test]
fn item_update_and_delete_touch_only_that_row() {
    let conn = open_db_in_memory().unwrap();
    let router = ProductRouter::new(SqliteProductStore::new(&conn));

    let kept = router
        .insert(&Locator::Collection, &ProductValues::new().with_name("kept"))
        .unwrap();
    let target = router
        .insert(
            &Locator::Collection,
            &ProductValues::new().with_name("target").with_quantity(5),
        )
        .unwrap();

    let changed = router
        .update(&target, None, &ProductValues::new().with_quantity(3))
        .unwrap();
    assert_eq!(changed, 1);

    let rows = router
        .query(&target, &[Column::Quantity], None, None)
        .unwrap();
    assert_eq!(rows[0].quantity, Some(3));

    assert_eq!(router.delete(&target, None).unwrap(), 1);
    assert_eq!(
        router.query(&target, &Column::ALL, None, None).unwrap().len(),
        0
    );
    assert_eq!(
        router.query(&kept, &Column::ALL, None, None).unwrap().len(),
        1
    );
}

#[test]
fn collection_delete_without_filter_clears_the_table() {
    let conn = open_db_in_memory().unwrap();
    let router = ProductRouter::new(SqliteProductStore::new(&conn));

    for n in 0..4 {
        router
            .insert(
                &Locator::Collection,
                &ProductValues::new().with_name(format!("item {n}")),
            )
            .unwrap();
    }

    assert_eq!(router.delete(&Locator::Collection, None).unwrap(), 4);
    let rows = router
        .query(&Locator::Collection, &[Column::Id], None, None)
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn query_for_missing_item_returns_empty_sequence() {
    let conn = open_db_in_memory().unwrap();
    let router = ProductRouter::new(SqliteProductStore::new(&conn));

    let rows = router
        .query(&Locator::Item(999), &Column::ALL, None, None)
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn content_type_matches_locator_shape() {
    let conn = open_db_in_memory().unwrap();
    let router = ProductRouter::new(SqliteProductStore::new(&conn));

    assert_eq!(
        router.content_type(&Locator::Collection),
        Locator::Collection.content_type()
    );
    assert_ne!(
        router.content_type(&Locator::Collection),
        router.content_type(&Locator::Item(1))
    );
}
