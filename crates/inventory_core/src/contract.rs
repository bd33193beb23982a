//! Shared naming contract for the products resource.
//!
//! # Responsibility
//! - Define the table name, column identifiers and resource path once.
//! - Keep content-type strings for the two locator shapes in one place.
//!
//! # Invariants
//! - These constants are the only source of schema/resource names; no other
//!   module spells them out inline.

/// Database table holding all product rows.
pub const TABLE_PRODUCTS: &str = "products";

/// Resource path identifying the product collection.
pub const PATH_PRODUCTS: &str = "products";

/// System-assigned row id, unique and never reused.
pub const COLUMN_ID: &str = "id";

/// Product name. Required and non-empty on every write.
pub const COLUMN_NAME: &str = "name";

/// Free-text product description.
pub const COLUMN_DESCRIPTION: &str = "description";

/// Units in stock.
pub const COLUMN_QUANTITY: &str = "quantity";

/// Unit price.
pub const COLUMN_PRICE: &str = "price";

/// Optional URI of the product image.
pub const COLUMN_IMAGE: &str = "image";

/// Supplier display name.
pub const COLUMN_SUPPLIER_NAME: &str = "supplier_name";

/// Supplier email used to build a reorder mailto action.
pub const COLUMN_SUPPLIER_EMAIL: &str = "supplier_email";

/// Content type describing the full product collection.
pub const CONTENT_TYPE_COLLECTION: &str = "inventory/dir/products";

/// Content type describing a single product item.
pub const CONTENT_TYPE_ITEM: &str = "inventory/item/products";
