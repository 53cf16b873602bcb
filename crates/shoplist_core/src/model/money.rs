//! Money parsing and display helpers.
//!
//! # Invariants
//! - Display amounts always carry exactly two decimal places.
//! - Parsed unit prices are plain non-negative decimals within `MAX_UNIT_PRICE`.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Upper bound accepted for one unit price.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

const DISPLAY_SCALE: u32 = 2;

static PLAIN_DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("valid decimal regex"));

/// Rounds half away from zero and renders with two decimals (`5` -> `5.00`).
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Parses user-entered unit price text.
///
/// Returns `None` for signs, exponents, separators other than `.`, values
/// that do not fit a `Decimal`, and values above `MAX_UNIT_PRICE`.
pub fn parse_unit_price(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if !PLAIN_DECIMAL_RE.is_match(trimmed) {
        return None;
    }
    let value = Decimal::from_str(trimmed).ok()?;
    if value > MAX_UNIT_PRICE {
        return None;
    }
    Some(value)
}
