//! Core domain logic for the Shoplist mobile app.
//! This crate is the single source of truth for list invariants and totals.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{
    DraftField, DraftValidationError, EditDraft, EditSession, ValidatedDraft, MAX_QUANTITY,
};
pub use model::item::{parse_item_id, Item, ItemId, ItemIdParseError, DEFAULT_QUANTITY};
pub use model::money::{format_amount, parse_unit_price, MAX_UNIT_PRICE};
pub use store::item_list_store::ItemListStore;
pub use store::snapshot::{ItemRow, ListSnapshot};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
