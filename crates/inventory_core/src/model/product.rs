//! Product domain model.
//!
//! # Responsibility
//! - Define the full product record and the partial write set used by
//!   insert/update paths.
//! - Provide quantity clamping and the supplier reorder mailto helper.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another product.
//! - `name` must be non-empty on every write that carries it.
//! - `quantity` stays within `[QUANTITY_MIN, QUANTITY_MAX]` on validated
//!   writes; `price` stays non-negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by the store at insert time.
pub type ProductId = i64;

/// Lowest stock level a product can be adjusted to.
pub const QUANTITY_MIN: i64 = 0;

/// Highest stock level a product can be adjusted to.
pub const QUANTITY_MAX: i64 = 100;

/// Constraint violated by a write set.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintError {
    /// Insert without a `name` field.
    MissingName,
    /// Write carrying an empty or whitespace-only `name`.
    EmptyName,
    /// Quantity outside `[QUANTITY_MIN, QUANTITY_MAX]`.
    QuantityOutOfRange(i64),
    /// Negative price.
    NegativePrice(f64),
}

impl Display for ConstraintError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "product requires a name"),
            Self::EmptyName => write!(f, "product name must not be empty"),
            Self::QuantityOutOfRange(value) => write!(
                f,
                "quantity {value} outside allowed range [{QUANTITY_MIN}, {QUANTITY_MAX}]"
            ),
            Self::NegativePrice(value) => write!(f, "price {value} must not be negative"),
        }
    }
}

impl Error for ConstraintError {}

/// Full persisted product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned row id.
    pub id: ProductId,
    /// Display name. Never empty.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Units in stock.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Optional URI of a picked product image.
    pub image_uri: Option<String>,
    /// Supplier display name.
    pub supplier_name: String,
    /// Supplier email used for reorder actions.
    pub supplier_email: String,
}

impl Product {
    /// Builds the reorder mailto action for this product's supplier.
    ///
    /// Returns `None` when no supplier email is recorded.
    pub fn order_mailto(&self) -> Option<String> {
        order_mailto_uri(&self.supplier_email)
    }
}

/// Partial write set: any subset of product columns.
///
/// Writes carry only the fields that are `Some`; absent fields are left
/// untouched by updates and fall back to column defaults on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductValues {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub image_uri: Option<String>,
    pub supplier_name: Option<String>,
    pub supplier_email: Option<String>,
}

impl ProductValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image_uri(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = Some(image_uri.into());
        self
    }

    pub fn with_supplier_name(mut self, supplier_name: impl Into<String>) -> Self {
        self.supplier_name = Some(supplier_name.into());
        self
    }

    pub fn with_supplier_email(mut self, supplier_email: impl Into<String>) -> Self {
        self.supplier_email = Some(supplier_email.into());
        self
    }

    /// Returns whether no field is set at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.image_uri.is_none()
            && self.supplier_name.is_none()
            && self.supplier_email.is_none()
    }

    /// Checks the `name` invariant enforced by the store.
    ///
    /// With `name_required` (insert path) the field must be present; on the
    /// update path only a present-but-empty name is rejected.
    pub fn validate_name(&self, name_required: bool) -> Result<(), ConstraintError> {
        match self.name.as_deref() {
            Some(name) if name.trim().is_empty() => Err(ConstraintError::EmptyName),
            Some(_) => Ok(()),
            None if name_required => Err(ConstraintError::MissingName),
            None => Ok(()),
        }
    }

    /// Checks the bounds promoted from editor policy to router invariants.
    pub fn validate_bounds(&self) -> Result<(), ConstraintError> {
        if let Some(quantity) = self.quantity {
            if !(QUANTITY_MIN..=QUANTITY_MAX).contains(&quantity) {
                return Err(ConstraintError::QuantityOutOfRange(quantity));
            }
        }
        if let Some(price) = self.price {
            if price < 0.0 {
                return Err(ConstraintError::NegativePrice(price));
            }
        }
        Ok(())
    }
}

/// Adds `delta` to a quantity, clamping to the allowed stock range.
pub fn clamped_add(quantity: i64, delta: i64) -> i64 {
    quantity
        .saturating_add(delta)
        .clamp(QUANTITY_MIN, QUANTITY_MAX)
}

/// Builds a `mailto:` action URI for a supplier email.
///
/// Returns `None` for a blank email so callers can disable the reorder
/// action instead of launching a dead-end intent.
pub fn order_mailto_uri(supplier_email: &str) -> Option<String> {
    let trimmed = supplier_email.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("mailto:{trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_name_requires_presence_on_insert_only() {
        let values = ProductValues::new().with_quantity(3);
        assert_eq!(values.validate_name(true), Err(ConstraintError::MissingName));
        assert_eq!(values.validate_name(false), Ok(()));
    }

    #[test]
    fn validate_name_rejects_blank_name_on_both_paths() {
        let values = ProductValues::new().with_name("   ");
        assert_eq!(values.validate_name(true), Err(ConstraintError::EmptyName));
        assert_eq!(values.validate_name(false), Err(ConstraintError::EmptyName));
    }

    #[test]
    fn validate_bounds_rejects_out_of_range_quantity_and_negative_price() {
        let too_many = ProductValues::new().with_quantity(QUANTITY_MAX + 1);
        assert_eq!(
            too_many.validate_bounds(),
            Err(ConstraintError::QuantityOutOfRange(QUANTITY_MAX + 1))
        );

        let negative = ProductValues::new().with_price(-0.5);
        assert_eq!(
            negative.validate_bounds(),
            Err(ConstraintError::NegativePrice(-0.5))
        );

        let fine = ProductValues::new().with_quantity(QUANTITY_MAX).with_price(0.0);
        assert_eq!(fine.validate_bounds(), Ok(()));
    }

    #[test]
    fn is_empty_reflects_any_set_field() {
        assert!(ProductValues::new().is_empty());
        assert!(!ProductValues::new().with_description("x").is_empty());
    }

    #[test]
    fn clamped_add_stays_inside_stock_range() {
        assert_eq!(clamped_add(5, 3), 8);
        assert_eq!(clamped_add(2, -10), QUANTITY_MIN);
        assert_eq!(clamped_add(95, 20), QUANTITY_MAX);
        assert_eq!(clamped_add(QUANTITY_MAX, i64::MAX), QUANTITY_MAX);
    }

    #[test]
    fn order_mailto_uri_skips_blank_addresses() {
        assert_eq!(order_mailto_uri("  "), None);
        assert_eq!(
            order_mailto_uri(" supplier@example.com "),
            Some("mailto:supplier@example.com".to_string())
        );
    }
}
