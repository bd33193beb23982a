//! Store layer: row-level persistence for products.
//!
//! # Responsibility
//! - Define the data-access contract used by routing and services.
//! - Isolate SQLite query details from the rest of the core.
//!
//! # Invariants
//! - Write paths enforce the `name` constraint before any SQL mutation.
//! - Read paths reject malformed persisted state instead of masking it.

pub mod product_store;
