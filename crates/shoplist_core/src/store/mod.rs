//! Shopping-list state container and its outbound views.
//!
//! # Responsibility
//! - Keep UI/FFI layers decoupled from mutation rules.
//! - Expose derived totals without caching them.

pub mod item_list_store;
pub mod snapshot;
