//! Core domain logic for the product inventory app.
//! This crate is the single source of truth for business invariants.

pub mod contract;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod router;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::product::{
    clamped_add, order_mailto_uri, ConstraintError, Product, ProductId, ProductValues,
    QUANTITY_MAX, QUANTITY_MIN,
};
pub use notify::ChangeNotifier;
pub use router::locator::{Locator, UnknownResource};
pub use router::product_router::{ProductRouter, RouterError, RouterResult};
pub use service::inventory_service::{InventoryService, DEFAULT_ORDER};
pub use store::product_store::{
    Column, Filter, ProductRow, ProductStore, SqliteProductStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
