use shoplist_core::{DraftField, ItemListStore};

#[test]
fn snapshot_reflects_rows_totals_and_edit_state() {
    let mut store = ItemListStore::new();
    let milk = store.add_item("Milk").unwrap();
    let bread = store.add_item("Bread").unwrap();
    store.update_quantity(milk, 1);
    store.start_edit(milk);
    store.update_draft_field(DraftField::UnitPrice, "2.5");
    store.save_edit().unwrap();
    store.start_edit(bread);
    store.update_draft_field(DraftField::Quantity, "7");

    let snapshot = store.snapshot();

    assert_eq!(snapshot.items.len(), 2);
    let milk_row = &snapshot.items[0];
    assert_eq!(milk_row.id, milk);
    assert_eq!(milk_row.quantity, 2);
    assert_eq!(milk_row.unit_price, "2.50");
    assert_eq!(milk_row.line_total, "5.00");
    assert!(!milk_row.is_editing);
    assert!(snapshot.items[1].is_editing);

    assert_eq!(snapshot.editing_id, Some(bread));
    assert_eq!(snapshot.draft.as_ref().unwrap().quantity, "7");
    assert_eq!(snapshot.total_item_count, 3);
    assert_eq!(snapshot.total_price, "5.00");
}

#[test]
fn snapshot_serializes_with_snake_case_wire_fields() {
    let mut store = ItemListStore::new();
    let id = store.add_item("Eggs").unwrap();

    let json = serde_json::to_value(store.snapshot()).unwrap();

    assert_eq!(json["items"][0]["id"], id.to_string());
    assert_eq!(json["items"][0]["name"], "Eggs");
    assert_eq!(json["items"][0]["quantity"], 1);
    assert_eq!(json["items"][0]["line_total"], "0.00");
    assert_eq!(json["items"][0]["is_editing"], false);
    assert!(json["editing_id"].is_null());
    assert!(json["draft"].is_null());
    assert_eq!(json["total_item_count"], 1);
    assert_eq!(json["total_price"], "0.00");
}

#[test]
fn empty_store_snapshot() {
    let snapshot = ItemListStore::new().snapshot();
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.editing_id, None);
    assert_eq!(snapshot.total_item_count, 0);
    assert_eq!(snapshot.total_price, "0.00");
}
