//! Shopping-list item model.
//!
//! # Responsibility
//! - Define the committed record rendered as one list row.
//! - Provide the per-row line-total calculation.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `name` is trimmed and non-empty.
//! - `unit_price` is never negative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one list item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Quantity assigned to freshly added items.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Committed shopping-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Generated once at creation time.
    pub id: ItemId,
    /// Display label, already trimmed.
    pub name: String,
    /// Number of units to buy.
    pub quantity: u32,
    /// Price of one unit, serialized as a decimal string.
    pub unit_price: Decimal,
}

impl Item {
    /// Creates an item with a generated id, quantity 1 and unit price 0.
    ///
    /// Callers are expected to pass already-trimmed, non-empty text.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an item with a caller-provided id and default amounts.
    pub fn with_id(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: DEFAULT_QUANTITY,
            unit_price: Decimal::ZERO,
        }
    }

    /// Returns `quantity * unit_price`.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }

    /// Returns `quantity + delta` when the result stays in `0..=max`.
    pub(crate) fn shifted_quantity(&self, delta: i64, max: u32) -> Option<u32> {
        let next = i64::from(self.quantity).checked_add(delta)?;
        if next < 0 || next > i64::from(max) {
            return None;
        }
        u32::try_from(next).ok()
    }
}

/// Error returned when an id string from outside the core is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemIdParseError {
    Empty,
    Malformed(String),
}

impl Display for ItemIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "item id cannot be empty"),
            Self::Malformed(raw) => write!(f, "invalid item id: `{raw}`"),
        }
    }
}

impl Error for ItemIdParseError {}

/// Parses an item id received as text (FFI, CLI).
pub fn parse_item_id(raw: &str) -> Result<ItemId, ItemIdParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ItemIdParseError::Empty);
    }
    Uuid::parse_str(trimmed).map_err(|_| ItemIdParseError::Malformed(trimmed.to_string()))
}
