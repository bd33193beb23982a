//! Inventory use-case service.
//!
//! # Responsibility
//! - Provide the operations the list and editor screens perform, expressed
//!   as direct calls into the router.
//! - Keep callers away from locators, filters and projections.
//!
//! # Invariants
//! - Service APIs never bypass router validation or notification.
//! - Quantity adjustments clamp to the allowed stock range.

use crate::model::product::{clamped_add, Product, ProductId, ProductValues};
use crate::router::locator::Locator;
use crate::router::product_router::{ProductRouter, RouterError, RouterResult};
use crate::store::product_store::{Column, ProductStore};

/// Default listing order: case-insensitive by product name.
pub const DEFAULT_ORDER: &str = "name COLLATE NOCASE ASC";

/// Use-case wrapper over the product router.
pub struct InventoryService<S> {
    router: ProductRouter<S>,
}

impl<S: ProductStore> InventoryService<S> {
    /// Creates a service over an already-wired router.
    pub fn new(router: ProductRouter<S>) -> Self {
        Self { router }
    }

    /// Creates a service with a fresh router around `store`.
    pub fn from_store(store: S) -> Self {
        Self::new(ProductRouter::new(store))
    }

    /// Access to the router, mainly for change-listener registration.
    pub fn router_mut(&mut self) -> &mut ProductRouter<S> {
        &mut self.router
    }

    /// Creates a product; returns its item locator.
    pub fn create_product(&self, values: &ProductValues) -> RouterResult<Locator> {
        self.router.insert(&Locator::Collection, values)
    }

    /// Loads one product, or `None` when the id is unknown.
    pub fn get_product(&self, id: ProductId) -> RouterResult<Option<Product>> {
        let rows = self
            .router
            .query(&Locator::Item(id), &Column::ALL, None, None)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.into_product()?)),
            None => Ok(None),
        }
    }

    /// Lists all products, ordered by `order` or [`DEFAULT_ORDER`].
    pub fn list_products(&self, order: Option<&str>) -> RouterResult<Vec<Product>> {
        let rows = self.router.query(
            &Locator::Collection,
            &Column::ALL,
            None,
            Some(order.unwrap_or(DEFAULT_ORDER)),
        )?;
        rows.into_iter()
            .map(|row| row.into_product().map_err(RouterError::from))
            .collect()
    }

    /// Applies a partial update to one product; returns the affected count.
    pub fn update_product(&self, id: ProductId, values: &ProductValues) -> RouterResult<usize> {
        self.router.update(&Locator::Item(id), None, values)
    }

    /// Shifts a product's stock by `delta`, clamped to the allowed range.
    ///
    /// Returns the persisted quantity, or `None` when the id is unknown.
    /// Backs the editor's increment/decrement buttons.
    pub fn adjust_quantity(&self, id: ProductId, delta: i64) -> RouterResult<Option<i64>> {
        let Some(product) = self.get_product(id)? else {
            return Ok(None);
        };

        let new_quantity = clamped_add(product.quantity, delta);
        self.router.update(
            &Locator::Item(id),
            None,
            &ProductValues::new().with_quantity(new_quantity),
        )?;
        Ok(Some(new_quantity))
    }

    /// Records one unit sold from the list screen; stock floors at zero.
    pub fn sell_one(&self, id: ProductId) -> RouterResult<Option<i64>> {
        self.adjust_quantity(id, -1)
    }

    /// Deletes one product; returns the affected count (0 or 1).
    pub fn delete_product(&self, id: ProductId) -> RouterResult<usize> {
        self.router.delete(&Locator::Item(id), None)
    }

    /// Deletes every product; returns the prior row count.
    pub fn delete_all(&self) -> RouterResult<usize> {
        self.router.delete(&Locator::Collection, None)
    }

    /// Builds the reorder mailto action for a product's supplier.
    ///
    /// `None` when the product is unknown or has no supplier email.
    pub fn order_more(&self, id: ProductId) -> RouterResult<Option<String>> {
        Ok(self.get_product(id)?.and_then(|product| product.order_mailto()))
    }
}
