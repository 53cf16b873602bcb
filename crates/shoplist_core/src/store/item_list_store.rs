//! Shopping-list view-state store.
//!
//! # Responsibility
//! - Own the ordered item list and the single optional edit session.
//! - Apply user intents as total, non-panicking mutations.
//! - Recompute derived totals on every read.
//!
//! # Invariants
//! - Item ids are unique; list order is insertion order.
//! - Quantities never leave `0..=MAX_QUANTITY`; rejected steps are no-ops.
//! - An edit session always references an item currently in the list.
//! - Logs carry ids and counts only, never item names or draft text.

use crate::model::draft::{
    DraftField, DraftValidationError, EditDraft, EditSession, MAX_QUANTITY,
};
use crate::model::item::{Item, ItemId};
use crate::model::money::format_amount;
use log::{debug, info, warn};
use rust_decimal::Decimal;

/// Owned container for list items and the current edit session.
#[derive(Debug, Clone, Default)]
pub struct ItemListStore {
    items: Vec<Item>,
    editing: Option<EditSession>,
}

impl ItemListStore {
    /// Creates an empty store that is not editing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item named from trimmed `raw_text`.
    ///
    /// Returns `None` without touching state when the trimmed text is empty.
    pub fn add_item(&mut self, raw_text: &str) -> Option<ItemId> {
        let name = raw_text.trim();
        if name.is_empty() {
            debug!("event=item_add module=store status=noop reason=empty_name");
            return None;
        }

        let item = Item::new(name);
        let id = item.id;
        self.items.push(item);
        info!(
            "event=item_add module=store status=ok item_id={} item_count={}",
            id,
            self.items.len()
        );
        Some(id)
    }

    /// Removes the item with `id`, preserving the order of the rest.
    ///
    /// Removing the edited item also closes the edit session.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=item_remove module=store status=noop item_id={id}");
            return false;
        };

        self.items.remove(index);
        if self.editing_id() == Some(id) {
            self.editing = None;
            debug!("event=edit_discard module=store status=ok item_id={id} reason=item_removed");
        }
        info!(
            "event=item_remove module=store status=ok item_id={} item_count={}",
            id,
            self.items.len()
        );
        true
    }

    /// Adds `delta` to the item's quantity when the result stays in range.
    ///
    /// Out-of-range results are rejected, not clamped.
    pub fn update_quantity(&mut self, id: ItemId, delta: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=quantity_update module=store status=noop item_id={id}");
            return false;
        };

        match item.shifted_quantity(delta, MAX_QUANTITY) {
            Some(quantity) => {
                item.quantity = quantity;
                debug!(
                    "event=quantity_update module=store status=ok item_id={id} quantity={quantity}"
                );
                true
            }
            None => {
                debug!(
                    "event=quantity_update module=store status=rejected item_id={} quantity={} delta={}",
                    id, item.quantity, delta
                );
                false
            }
        }
    }

    /// Opens an edit session seeded from the item's committed values.
    ///
    /// Any previous draft is discarded without saving. Unknown ids leave the
    /// current session untouched.
    pub fn start_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item(id) else {
            debug!("event=edit_start module=store status=noop item_id={id}");
            return false;
        };

        let draft = EditDraft::from_item(item);
        if let Some(previous) = self.editing.replace(EditSession { item_id: id, draft }) {
            if previous.item_id != id {
                debug!(
                    "event=edit_discard module=store status=ok item_id={} reason=edit_switched",
                    previous.item_id
                );
            }
        }
        debug!("event=edit_start module=store status=ok item_id={id}");
        true
    }

    /// Overwrites one draft field verbatim. No-op when not editing.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        match self.editing.as_mut() {
            Some(session) => {
                session.draft.set(field, value);
                true
            }
            None => {
                debug!(
                    "event=draft_update module=store status=noop field={}",
                    field.as_str()
                );
                false
            }
        }
    }

    /// Validates the draft and commits it onto the edited item.
    ///
    /// Returns `Ok(Some(id))` on commit and `Ok(None)` when there was nothing
    /// to save.
    ///
    /// # Errors
    /// Returns the draft validation error; nothing is committed and the
    /// session stays open so the caller can flag the field.
    pub fn save_edit(&mut self) -> Result<Option<ItemId>, DraftValidationError> {
        let Some(session) = self.editing.as_ref() else {
            debug!("event=edit_save module=store status=noop reason=not_editing");
            return Ok(None);
        };
        let id = session.item_id;

        let validated = session.draft.validate().map_err(|err| {
            warn!(
                "event=edit_save module=store status=rejected item_id={} field={}",
                id,
                err.field().as_str()
            );
            err
        })?;

        self.editing = None;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            warn!("event=edit_save module=store status=noop item_id={id} reason=item_missing");
            return Ok(None);
        };
        item.name = validated.name;
        item.quantity = validated.quantity;
        item.unit_price = validated.unit_price;
        info!("event=edit_save module=store status=ok item_id={id}");
        Ok(Some(id))
    }

    /// Closes the edit session without committing.
    pub fn cancel_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(session) => {
                debug!(
                    "event=edit_cancel module=store status=ok item_id={}",
                    session.item_id
                );
                true
            }
            None => false,
        }
    }

    /// Removes every item and closes any edit session.
    pub fn reset_list(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        self.editing = None;
        info!("event=list_reset module=store status=ok removed={removed}");
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up one item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current edit session, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        self.editing.as_ref().map(|session| session.item_id)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.editing.as_ref().map(|session| &session.draft)
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing_id() == Some(id)
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |total, item| total.saturating_add(item.line_total()))
    }

    /// `total_price()` rendered with two decimals.
    pub fn total_price_display(&self) -> String {
        format_amount(self.total_price())
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::ItemListStore;
    use crate::model::draft::{DraftField, MAX_QUANTITY};
    use uuid::Uuid;

    #[test]
    fn new_store_is_empty_and_idle() {
        let store = ItemListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.editing(), None);
        assert_eq!(store.total_item_count(), 0);
        assert_eq!(store.total_price_display(), "0.00");
    }

    #[test]
    fn removing_edited_item_closes_session() {
        let mut store = ItemListStore::new();
        let id = store.add_item("Milk").unwrap();
        assert!(store.start_edit(id));

        assert!(store.remove_item(id));
        assert_eq!(store.editing(), None);
        assert_eq!(store.save_edit(), Ok(None));
    }

    #[test]
    fn removing_other_item_keeps_session() {
        let mut store = ItemListStore::new();
        let milk = store.add_item("Milk").unwrap();
        let eggs = store.add_item("Eggs").unwrap();
        assert!(store.start_edit(milk));

        assert!(store.remove_item(eggs));
        assert_eq!(store.editing_id(), Some(milk));
    }

    #[test]
    fn start_edit_with_unknown_id_keeps_current_session() {
        let mut store = ItemListStore::new();
        let id = store.add_item("Milk").unwrap();
        store.start_edit(id);
        store.update_draft_field(DraftField::Name, "Oat milk");

        assert!(!store.start_edit(Uuid::new_v4()));
        assert_eq!(store.editing_id(), Some(id));
        assert_eq!(store.draft().unwrap().name, "Oat milk");
    }

    #[test]
    fn draft_update_without_session_is_noop() {
        let mut store = ItemListStore::new();
        assert!(!store.update_draft_field(DraftField::Quantity, "3"));
        assert_eq!(store.draft(), None);
    }

    #[test]
    fn update_quantity_rejects_past_maximum() {
        let mut store = ItemListStore::new();
        let id = store.add_item("Rice").unwrap();

        assert!(!store.update_quantity(id, i64::from(MAX_QUANTITY)));
        assert_eq!(store.item(id).unwrap().quantity, 1);
        assert!(store.update_quantity(id, i64::from(MAX_QUANTITY) - 1));
        assert_eq!(store.item(id).unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn cancel_edit_discards_draft() {
        let mut store = ItemListStore::new();
        let id = store.add_item("Milk").unwrap();
        store.start_edit(id);
        store.update_draft_field(DraftField::Name, "Cream");

        assert!(store.cancel_edit());
        assert!(!store.cancel_edit());
        assert_eq!(store.item(id).unwrap().name, "Milk");
    }
}
