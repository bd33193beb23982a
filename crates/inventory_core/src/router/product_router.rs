//! Product router: locator-shaped CRUD over the store.
//!
//! # Responsibility
//! - Dispatch query/insert/update/delete per locator shape.
//! - Validate write sets (required name reaches the store; promoted
//!   quantity/price bounds are checked here) before delegating.
//! - Notify collection observers after successful mutations.
//!
//! # Invariants
//! - Item operations run with the filter forced to `id = <id>`.
//! - Insert on an item locator never reaches the store.
//! - Exactly one notification per mutation affecting at least one row.

use crate::model::product::{ConstraintError, ProductValues};
use crate::notify::ChangeNotifier;
use crate::router::locator::{Locator, UnknownResource};
use crate::store::product_store::{Column, Filter, ProductRow, ProductStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RouterResult<T> = Result<T, RouterError>;

/// Error surface of the routing layer.
#[derive(Debug)]
pub enum RouterError {
    /// Locator text matched neither known shape.
    UnknownResource(UnknownResource),
    /// Operation is not valid for the locator shape.
    UnsupportedOperation {
        operation: &'static str,
        locator: Locator,
    },
    /// Store-level failure, forwarded unchanged.
    Store(StoreError),
}

impl Display for RouterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownResource(err) => write!(f, "{err}"),
            Self::UnsupportedOperation { operation, locator } => {
                write!(f, "{operation} is not supported for `{locator}`")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RouterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownResource(err) => Some(err),
            Self::UnsupportedOperation { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<UnknownResource> for RouterError {
    fn from(value: UnknownResource) -> Self {
        Self::UnknownResource(value)
    }
}

impl From<StoreError> for RouterError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ConstraintError> for RouterError {
    fn from(value: ConstraintError) -> Self {
        Self::Store(StoreError::Constraint(value))
    }
}

/// Routes locator-addressed operations onto a [`ProductStore`].
pub struct ProductRouter<S> {
    store: S,
    notifier: ChangeNotifier,
}

impl<S: ProductStore> ProductRouter<S> {
    pub fn new(store: S) -> Self {
        Self::with_notifier(store, ChangeNotifier::new())
    }

    pub fn with_notifier(store: S, notifier: ChangeNotifier) -> Self {
        Self { store, notifier }
    }

    /// Registration point for change listeners.
    pub fn notifier_mut(&mut self) -> &mut ChangeNotifier {
        &mut self.notifier
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Queries rows under `locator`.
    ///
    /// An item locator forces the filter to its id; a collection locator
    /// forwards the caller's filter unchanged.
    pub fn query(
        &self,
        locator: &Locator,
        projection: &[Column],
        filter: Option<&Filter>,
        order: Option<&str>,
    ) -> RouterResult<Vec<ProductRow>> {
        let rows = match locator {
            Locator::Collection => self.store.query(projection, filter, order)?,
            Locator::Item(id) => {
                self.store
                    .query(projection, Some(&Filter::id_equals(*id)), order)?
            }
        };
        Ok(rows)
    }

    /// Inserts a product under the collection locator.
    ///
    /// Returns the new item locator. Item locators are rejected before the
    /// store is consulted.
    pub fn insert(&self, locator: &Locator, values: &ProductValues) -> RouterResult<Locator> {
        if let Locator::Item(_) = locator {
            return Err(RouterError::UnsupportedOperation {
                operation: "insert",
                locator: *locator,
            });
        }

        values.validate_bounds()?;
        let id = self.store.insert(values)?;
        self.notifier.notify(&Locator::Collection);
        Ok(Locator::Item(id))
    }

    /// Updates rows under `locator`; returns the rows-affected count.
    pub fn update(
        &self,
        locator: &Locator,
        filter: Option<&Filter>,
        values: &ProductValues,
    ) -> RouterResult<usize> {
        values.validate_bounds()?;

        let changed = match locator {
            Locator::Collection => self.store.update(filter, values)?,
            Locator::Item(id) => self.store.update(Some(&Filter::id_equals(*id)), values)?,
        };

        if changed > 0 {
            self.notifier.notify(&Locator::Collection);
        }
        Ok(changed)
    }

    /// Deletes rows under `locator`; returns the rows-affected count.
    pub fn delete(&self, locator: &Locator, filter: Option<&Filter>) -> RouterResult<usize> {
        let removed = match locator {
            Locator::Collection => self.store.delete(filter)?,
            Locator::Item(id) => self.store.delete(Some(&Filter::id_equals(*id)))?,
        };

        if removed > 0 {
            self.notifier.notify(&Locator::Collection);
        }
        Ok(removed)
    }

    /// Descriptive content type for `locator` (see `Locator::content_type`).
    pub fn content_type(&self, locator: &Locator) -> &'static str {
        locator.content_type()
    }
}
