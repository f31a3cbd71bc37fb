//! Core business logic layer
//!
//! Quote model, the store that owns the list, and the pieces that read it:
//! random view, category filter, import/export.

pub mod data;
pub mod filter;
pub mod store;
pub mod transfer;
pub mod view;
