//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the shopping-list intents to Dart via FRB.
//! - Own the single process-wide `ItemListStore` the UI drives.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Item ids cross the boundary as canonical UUID strings.
//! - Every mutating call is followed by `list_snapshot` on the UI side.

use log::warn;
use once_cell::sync::Lazy;
use shoplist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_item_id,
    ping as ping_inner, DraftField, ItemId, ItemListStore, ListSnapshot,
};
use std::sync::{Mutex, MutexGuard};

static LIST_STORE: Lazy<Mutex<ItemListStore>> = Lazy::new(|| Mutex::new(ItemListStore::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for list intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListActionResponse {
    /// Whether the intent changed list state.
    pub ok: bool,
    /// Affected item ID, when one applies.
    pub item_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Draft field to flag after a rejected save (`name|quantity|unit_price`).
    pub invalid_field: Option<String>,
}

impl ListActionResponse {
    fn success(message: impl Into<String>, item_id: Option<ItemId>) -> Self {
        Self {
            ok: true,
            item_id: item_id.map(|id| id.to_string()),
            message: message.into(),
            invalid_field: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            message: message.into(),
            invalid_field: None,
        }
    }
}

/// One list row for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemView {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    /// Two-decimal unit price.
    pub unit_price: String,
    /// Two-decimal `quantity * unit_price`.
    pub line_total: String,
    pub is_editing: bool,
}

/// Raw draft text for the row being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDraftView {
    pub item_id: String,
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
}

/// Full render state returned after every intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshotResponse {
    pub items: Vec<ListItemView>,
    pub draft: Option<ListDraftView>,
    pub total_item_count: u64,
    /// Two-decimal sum of all line totals.
    pub total_price: String,
}

/// Adds one item from the entry text box.
///
/// # FFI contract
/// - Blank text is rejected without changing state.
/// - Returns the created item ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn list_add_item(text: String) -> ListActionResponse {
    match with_store(|store| store.add_item(&text)) {
        Some(id) => ListActionResponse::success("Item added.", Some(id)),
        None => ListActionResponse::failure("Item name is empty."),
    }
}

/// Removes one item by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn list_remove_item(item_id: String) -> ListActionResponse {
    with_item_id(&item_id, |store, id| {
        if store.remove_item(id) {
            ListActionResponse::success("Item removed.", Some(id))
        } else {
            ListActionResponse::failure(format!("item not found: {id}"))
        }
    })
}

/// Steps one item's quantity by `delta` (`+1`/`-1` from the row buttons).
///
/// # FFI contract
/// - Steps below zero are rejected, not clamped.
#[flutter_rust_bridge::frb(sync)]
pub fn list_update_quantity(item_id: String, delta: i64) -> ListActionResponse {
    with_item_id(&item_id, |store, id| {
        if store.update_quantity(id, delta) {
            ListActionResponse::success("Quantity updated.", Some(id))
        } else {
            ListActionResponse::failure(format!("quantity unchanged for {id}"))
        }
    })
}

/// Opens the inline editor for one item, discarding any other draft.
#[flutter_rust_bridge::frb(sync)]
pub fn list_start_edit(item_id: String) -> ListActionResponse {
    with_item_id(&item_id, |store, id| {
        if store.start_edit(id) {
            ListActionResponse::success("Editing item.", Some(id))
        } else {
            ListActionResponse::failure(format!("item not found: {id}"))
        }
    })
}

/// Writes raw text into one draft field (`name|quantity|unit_price`).
#[flutter_rust_bridge::frb(sync)]
pub fn list_update_draft(field: String, value: String) -> ListActionResponse {
    let Some(field) = DraftField::parse(&field) else {
        return ListActionResponse::failure(format!("unknown draft field: `{field}`"));
    };
    let editing_id = with_store(|store| {
        store.update_draft_field(field, value);
        store.editing_id()
    });
    match editing_id {
        Some(id) => ListActionResponse::success("Draft updated.", Some(id)),
        None => ListActionResponse::failure("No item is being edited."),
    }
}

/// Validates and commits the current draft.
///
/// # FFI contract
/// - On validation failure the editor stays open and `invalid_field` names
///   the field to flag.
#[flutter_rust_bridge::frb(sync)]
pub fn list_save_edit() -> ListActionResponse {
    match with_store(|store| store.save_edit()) {
        Ok(Some(id)) => ListActionResponse::success("Item saved.", Some(id)),
        Ok(None) => ListActionResponse::failure("No item is being edited."),
        Err(err) => ListActionResponse {
            invalid_field: Some(err.field().as_str().to_string()),
            ..ListActionResponse::failure(err.to_string())
        },
    }
}

/// Closes the editor without saving.
#[flutter_rust_bridge::frb(sync)]
pub fn list_cancel_edit() -> ListActionResponse {
    if with_store(|store| store.cancel_edit()) {
        ListActionResponse::success("Edit cancelled.", None)
    } else {
        ListActionResponse::failure("No item is being edited.")
    }
}

/// Clears the whole list and any open editor.
#[flutter_rust_bridge::frb(sync)]
pub fn list_reset() -> ListActionResponse {
    with_store(|store| store.reset_list());
    ListActionResponse::success("List cleared.", None)
}

/// Returns the current render state with fresh totals.
#[flutter_rust_bridge::frb(sync)]
pub fn list_snapshot() -> ListSnapshotResponse {
    to_snapshot_response(with_store(|store| store.snapshot()))
}

fn with_store<T>(f: impl FnOnce(&mut ItemListStore) -> T) -> T {
    let mut guard = lock_store();
    f(&mut *guard)
}

fn with_item_id(
    raw_id: &str,
    f: impl FnOnce(&mut ItemListStore, ItemId) -> ListActionResponse,
) -> ListActionResponse {
    match parse_item_id(raw_id) {
        Ok(id) => with_store(|store| f(store, id)),
        Err(err) => ListActionResponse::failure(err.to_string()),
    }
}

fn lock_store() -> MutexGuard<'static, ItemListStore> {
    LIST_STORE.lock().unwrap_or_else(|poisoned| {
        // Store mutations are total; state behind a poisoned lock is still consistent.
        warn!("event=store_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn to_snapshot_response(snapshot: ListSnapshot) -> ListSnapshotResponse {
    let draft = snapshot
        .editing_id
        .zip(snapshot.draft)
        .map(|(id, draft)| ListDraftView {
            item_id: id.to_string(),
            name: draft.name,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
        });
    let items = snapshot
        .items
        .into_iter()
        .map(|row| ListItemView {
            item_id: row.id.to_string(),
            name: row.name,
            quantity: row.quantity,
            unit_price: row.unit_price,
            line_total: row.line_total,
            is_editing: row.is_editing,
        })
        .collect();

    ListSnapshotResponse {
        items,
        draft,
        total_item_count: snapshot.total_item_count,
        total_price: snapshot.total_price,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, list_add_item, list_cancel_edit, list_remove_item,
        list_reset, list_save_edit, list_snapshot, list_start_edit, list_update_draft,
        list_update_quantity, ping,
    };
    use std::sync::{Mutex, MutexGuard};

    // The FFI store is process-wide; serialize tests that mutate it.
    static FFI_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn exclusive() -> MutexGuard<'static, ()> {
        let guard = FFI_TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        list_reset();
        guard
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/shoplist-logs".to_string());
        assert!(error.contains("unsupported"));
    }

    #[test]
    fn add_edit_save_updates_snapshot_totals() {
        let _guard = exclusive();

        let added = list_add_item("  Milk ".to_string());
        assert!(added.ok, "{}", added.message);
        let item_id = added.item_id.expect("add should return item_id");

        assert!(list_update_quantity(item_id.clone(), 1).ok);
        assert!(list_start_edit(item_id.clone()).ok);
        assert!(list_update_draft("unit_price".to_string(), "2.50".to_string()).ok);

        let editing = list_snapshot();
        let draft = editing.draft.expect("draft should be visible while editing");
        assert_eq!(draft.item_id, item_id);
        assert_eq!(draft.unit_price, "2.50");

        let saved = list_save_edit();
        assert!(saved.ok, "{}", saved.message);

        let snapshot = list_snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].name, "Milk");
        assert_eq!(snapshot.items[0].line_total, "5.00");
        assert_eq!(snapshot.total_item_count, 2);
        assert_eq!(snapshot.total_price, "5.00");
        assert!(snapshot.draft.is_none());
    }

    #[test]
    fn blank_add_and_bad_ids_are_rejected() {
        let _guard = exclusive();

        assert!(!list_add_item("   ".to_string()).ok);
        assert!(!list_remove_item("not-a-uuid".to_string()).ok);
        assert!(!list_start_edit(String::new()).ok);
        assert!(list_snapshot().items.is_empty());
    }

    #[test]
    fn rejected_save_reports_invalid_field_and_keeps_editor_open() {
        let _guard = exclusive();

        let item_id = list_add_item("Bread".to_string()).item_id.unwrap();
        list_start_edit(item_id.clone());
        list_update_draft("quantity".to_string(), "two".to_string());

        let saved = list_save_edit();
        assert!(!saved.ok);
        assert_eq!(saved.invalid_field.as_deref(), Some("quantity"));
        assert!(saved.message.contains("`two`"));

        let snapshot = list_snapshot();
        assert_eq!(snapshot.items[0].quantity, 1);
        assert!(snapshot.items[0].is_editing);

        assert!(list_cancel_edit().ok);
        assert!(list_snapshot().draft.is_none());
    }

    #[test]
    fn unknown_draft_field_is_rejected() {
        let _guard = exclusive();

        let response = list_update_draft("price".to_string(), "1".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("unknown draft field"));
    }

    #[test]
    fn reset_and_remove_shrink_the_list() {
        let _guard = exclusive();

        let bread = list_add_item("Bread".to_string()).item_id.unwrap();
        list_add_item("Eggs".to_string());
        assert!(list_remove_item(bread.clone()).ok);
        assert!(!list_remove_item(bread).ok);
        assert_eq!(list_snapshot().items.len(), 1);

        assert!(list_reset().ok);
        let snapshot = list_snapshot();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total_item_count, 0);
        assert_eq!(snapshot.total_price, "0.00");
    }

    #[test]
    fn quantity_cannot_step_below_zero() {
        let _guard = exclusive();

        let item_id = list_add_item("Salt".to_string()).item_id.unwrap();
        assert!(list_update_quantity(item_id.clone(), -1).ok);
        assert!(!list_update_quantity(item_id, -1).ok);
        assert_eq!(list_snapshot().items[0].quantity, 0);
    }
}
