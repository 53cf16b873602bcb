//! Render-ready snapshot of the store.
//!
//! The presentation layer re-reads a snapshot after every intent instead of
//! holding references into the store.

use crate::model::draft::EditDraft;
use crate::model::item::ItemId;
use crate::model::money::format_amount;
use crate::store::item_list_store::ItemListStore;
use serde::Serialize;

/// One list row with display-formatted amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub is_editing: bool,
}

/// Full outbound view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSnapshot {
    pub items: Vec<ItemRow>,
    pub editing_id: Option<ItemId>,
    pub draft: Option<EditDraft>,
    pub total_item_count: u64,
    pub total_price: String,
}

impl ItemListStore {
    /// Builds a snapshot with freshly computed totals.
    pub fn snapshot(&self) -> ListSnapshot {
        let editing_id = self.editing_id();
        let items = self
            .items()
            .iter()
            .map(|item| ItemRow {
                id: item.id,
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: format_amount(item.unit_price),
                line_total: format_amount(item.line_total()),
                is_editing: editing_id == Some(item.id),
            })
            .collect();

        ListSnapshot {
            items,
            editing_id,
            draft: self.draft().cloned(),
            total_item_count: self.total_item_count(),
            total_price: self.total_price_display(),
        }
    }
}
