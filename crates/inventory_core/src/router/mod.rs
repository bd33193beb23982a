//! Resource routing: locators mapped onto store operations.
//!
//! # Responsibility
//! - Resolve collection/item locators and enforce per-shape operation rules.
//! - Rewrite item-locator filters to an exact id match.
//! - Fire change notifications after successful mutations.
//!
//! # Invariants
//! - Structural errors (unknown resource, unsupported operation) are raised
//!   before any store call.
//! - Notifications always target the collection locator, at most once per
//!   mutation.

pub mod locator;
pub mod product_router;
