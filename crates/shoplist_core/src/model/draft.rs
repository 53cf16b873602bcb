//! Edit draft model.
//!
//! # Responsibility
//! - Hold raw, unvalidated text for the item currently being edited.
//! - Validate that text into committable values at save time.
//!
//! # Invariants
//! - Draft fields accept any text; validation is deferred to `validate()`.
//! - A draft never mutates the committed `Item` it was created from.

use crate::model::item::{Item, ItemId};
use crate::model::money::{parse_unit_price, MAX_UNIT_PRICE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound for one item quantity, applied to drafts and quantity steps.
pub const MAX_QUANTITY: u32 = 1_000_000;

/// Editable draft field selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Quantity,
    UnitPrice,
}

impl DraftField {
    /// Stable string id used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::UnitPrice => "unit_price",
        }
    }

    /// Parses a stable string id back into a field selector.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "quantity" => Some(Self::Quantity),
            "unit_price" => Some(Self::UnitPrice),
            _ => None,
        }
    }
}

/// Raw text scratch copy of an item's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditDraft {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
}

/// Values extracted from a draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Validation failure for one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    EmptyName,
    InvalidQuantity(String),
    InvalidUnitPrice(String),
}

impl DraftValidationError {
    /// Field the presentation layer should flag.
    pub fn field(&self) -> DraftField {
        match self {
            Self::EmptyName => DraftField::Name,
            Self::InvalidQuantity(_) => DraftField::Quantity,
            Self::InvalidUnitPrice(_) => DraftField::UnitPrice,
        }
    }
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name cannot be empty"),
            Self::InvalidQuantity(raw) => write!(
                f,
                "quantity must be a whole number between 0 and {MAX_QUANTITY}, got `{raw}`"
            ),
            Self::InvalidUnitPrice(raw) => write!(
                f,
                "unit price must be a decimal between 0 and {MAX_UNIT_PRICE}, got `{raw}`"
            ),
        }
    }
}

impl Error for DraftValidationError {}

impl EditDraft {
    /// Seeds a draft from the committed values of `item`.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
        }
    }

    /// Overwrites one field verbatim.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Quantity => &mut self.quantity,
            DraftField::UnitPrice => &mut self.unit_price,
        };
        *slot = value.into();
    }

    /// Reads one field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Quantity => &self.quantity,
            DraftField::UnitPrice => &self.unit_price,
        }
    }

    /// Validates fields in name, quantity, unit price order.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed name is empty.
    /// - `InvalidQuantity` when quantity is not an integer in `0..=MAX_QUANTITY`.
    /// - `InvalidUnitPrice` when unit price is not a plain decimal in
    ///   `0..=MAX_UNIT_PRICE`.
    pub fn validate(&self) -> Result<ValidatedDraft, DraftValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftValidationError::EmptyName);
        }

        let quantity = parse_quantity(&self.quantity)
            .ok_or_else(|| DraftValidationError::InvalidQuantity(self.quantity.clone()))?;
        let unit_price = parse_unit_price(&self.unit_price)
            .ok_or_else(|| DraftValidationError::InvalidUnitPrice(self.unit_price.clone()))?;

        Ok(ValidatedDraft {
            name: name.to_string(),
            quantity,
            unit_price,
        })
    }
}

/// Editing session bound to exactly one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    pub item_id: ItemId,
    pub draft: EditDraft,
}

fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    // `u32::from_str` accepts a leading `+`; quantities are digits only.
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|quantity| *quantity <= MAX_QUANTITY)
}
