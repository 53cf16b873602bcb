//! Shopping-list domain model.
//!
//! # Responsibility
//! - Define committed items, edit drafts and money helpers.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Draft text is only turned into item values through `EditDraft::validate`.

pub mod draft;
pub mod item;
pub mod money;
