//! FFI use-case API for the UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI shell.
//! - Keep error semantics simple: envelope structs, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The database path is resolved once per process and stays fixed.

use inventory_core::db::open_db;
use inventory_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InventoryService, Locator, Product, ProductValues, RouterResult, SqliteProductStore,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "inventory.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for bridge smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the database directory for this process.
///
/// # FFI contract
/// - Must be called before the first data operation to take effect; later
///   calls against a different directory report an error.
#[flutter_rust_bridge::frb(sync)]
pub fn set_db_dir(db_dir: String) -> String {
    let requested = PathBuf::from(db_dir).join(DB_FILE_NAME);
    let active = DB_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!(
            "database path already set to `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        )
    }
}

/// One product as shown on the list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub image_uri: Option<String>,
    pub supplier_name: String,
    pub supplier_email: String,
}

/// List-screen response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListResponse {
    /// Products in display order (empty on failure).
    pub items: Vec<ProductItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for editor-screen commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected product id, when one exists.
    pub id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ProductActionResponse {
    fn success(message: impl Into<String>, id: Option<i64>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Quantity adjustment response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityResponse {
    pub ok: bool,
    /// Persisted quantity after the adjustment; `None` for unknown ids.
    pub quantity: Option<i64>,
    pub message: String,
}

/// Lists all products in default display order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_products() -> ProductListResponse {
    match with_service(|service| service.list_products(None)) {
        Ok(products) => {
            let items = products.into_iter().map(to_product_item).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No products.".to_string()
            } else {
                format!("Loaded {} product(s).", items.len())
            };
            ProductListResponse { items, message }
        }
        Err(err) => ProductListResponse {
            items: Vec::new(),
            message: format!("list_products failed: {err}"),
        },
    }
}

/// Creates a product from the editor screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; constraint violations come back as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn create_product(
    name: String,
    description: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
    image_uri: Option<String>,
    supplier_name: Option<String>,
    supplier_email: Option<String>,
) -> ProductActionResponse {
    let mut values = ProductValues::new().with_name(name.trim());
    values.description = description;
    values.quantity = quantity;
    values.price = price;
    values.image_uri = image_uri;
    values.supplier_name = supplier_name;
    values.supplier_email = supplier_email;

    match with_service(|service| service.create_product(&values)) {
        Ok(Locator::Item(id)) => ProductActionResponse::success("Product created.", Some(id)),
        Ok(locator) => {
            ProductActionResponse::failure(format!("unexpected locator `{locator}` from insert"))
        }
        Err(err) => ProductActionResponse::failure(format!("create_product failed: {err}")),
    }
}

/// Adjusts a product's stock by `delta`, clamped to the allowed range.
///
/// Backs the editor's increment/decrement buttons and the list-screen sale
/// button (`delta = -1`).
#[flutter_rust_bridge::frb(sync)]
pub fn adjust_quantity(id: i64, delta: i64) -> QuantityResponse {
    match with_service(|service| service.adjust_quantity(id, delta)) {
        Ok(Some(quantity)) => QuantityResponse {
            ok: true,
            quantity: Some(quantity),
            message: "Quantity updated.".to_string(),
        },
        Ok(None) => QuantityResponse {
            ok: false,
            quantity: None,
            message: format!("No product with id {id}."),
        },
        Err(err) => QuantityResponse {
            ok: false,
            quantity: None,
            message: format!("adjust_quantity failed: {err}"),
        },
    }
}

/// Deletes one product.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_product(id: i64) -> ProductActionResponse {
    match with_service(|service| service.delete_product(id)) {
        Ok(0) => ProductActionResponse::failure(format!("No product with id {id}.")),
        Ok(_) => ProductActionResponse::success("Product deleted.", Some(id)),
        Err(err) => ProductActionResponse::failure(format!("delete_product failed: {err}")),
    }
}

/// Deletes every product (list-screen "delete all" menu action).
#[flutter_rust_bridge::frb(sync)]
pub fn delete_all_products() -> ProductActionResponse {
    match with_service(|service| service.delete_all()) {
        Ok(removed) => {
            ProductActionResponse::success(format!("Deleted {removed} product(s)."), None)
        }
        Err(err) => ProductActionResponse::failure(format!("delete_all_products failed: {err}")),
    }
}

/// Returns the reorder mailto URI for a product's supplier.
///
/// Empty string when the product is unknown or has no supplier email; the
/// UI disables the order action in that case.
#[flutter_rust_bridge::frb(sync)]
pub fn order_mailto(id: i64) -> String {
    match with_service(|service| service.order_more(id)) {
        Ok(Some(uri)) => uri,
        Ok(None) => String::new(),
        Err(err) => {
            log::warn!("event=order_mailto module=ffi status=error error={err}");
            String::new()
        }
    }
}

fn with_service<T>(
    operation: impl for<'conn> FnOnce(
        &InventoryService<SqliteProductStore<'conn>>,
    ) -> RouterResult<T>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| err.to_string())?;
    let service = InventoryService::from_store(SqliteProductStore::new(&conn));
    operation(&service).map_err(|err| err.to_string())
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| std::env::temp_dir().join(DB_FILE_NAME))
        .clone()
}

fn to_product_item(product: Product) -> ProductItem {
    ProductItem {
        id: product.id,
        name: product.name,
        description: product.description,
        quantity: product.quantity,
        price: product.price,
        image_uri: product.image_uri,
        supplier_name: product.supplier_name,
        supplier_email: product.supplier_email,
    }
}
