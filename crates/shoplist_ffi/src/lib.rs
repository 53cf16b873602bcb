//! Flutter bridge crate for the Shoplist core.

pub mod api;
