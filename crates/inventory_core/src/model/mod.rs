//! Domain model for the product inventory.
//!
//! # Responsibility
//! - Define the canonical product record and the partial write set.
//! - Own field-level constraint checks shared by store and router.
//!
//! # Invariants
//! - Every persisted product is identified by a store-assigned `ProductId`.
//! - `name` is never empty on any persisted row.

pub mod product;
