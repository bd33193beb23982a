//! Resource locator shapes and parsing.
//!
//! # Responsibility
//! - Define the two locator shapes: the product collection and one product
//!   by id.
//! - Parse textual locators, rejecting everything else.
//!
//! # Invariants
//! - Item ids are positive; zero and negative ids never parse.
//! - `parse` and `Display` round-trip for both shapes.

use crate::contract;
use crate::model::product::ProductId;
use std::fmt::{Display, Formatter};

/// Abstract reference to the product collection or one product by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// All products.
    Collection,
    /// One product carrying its store-assigned id.
    Item(ProductId),
}

impl Locator {
    /// Parses a textual locator.
    ///
    /// Accepts exactly `products` and `products/<positive id>`. Leading and
    /// trailing slashes are tolerated; anything else is unknown.
    pub fn parse(input: &str) -> Result<Self, UnknownResource> {
        let unknown = || UnknownResource(input.to_string());
        let mut segments = input.trim_matches('/').split('/');

        if segments.next() != Some(contract::PATH_PRODUCTS) {
            return Err(unknown());
        }

        match segments.next() {
            None => Ok(Self::Collection),
            Some(raw_id) => {
                if segments.next().is_some() {
                    return Err(unknown());
                }
                let id: ProductId = raw_id.parse().map_err(|_| unknown())?;
                if id <= 0 {
                    return Err(unknown());
                }
                Ok(Self::Item(id))
            }
        }
    }

    /// Descriptive content type for this locator shape.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Collection => contract::CONTENT_TYPE_COLLECTION,
            Self::Item(_) => contract::CONTENT_TYPE_ITEM,
        }
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collection => write!(f, "{}", contract::PATH_PRODUCTS),
            Self::Item(id) => write!(f, "{}/{id}", contract::PATH_PRODUCTS),
        }
    }
}

/// Locator text matched neither known shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResource(pub String);

impl Display for UnknownResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown resource locator `{}`", self.0)
    }
}

impl std::error::Error for UnknownResource {}

#[cfg(test)]
mod tests {
    use super::Locator;

    #[test]
    fn parse_accepts_collection_and_item_shapes() {
        assert_eq!(Locator::parse("products"), Ok(Locator::Collection));
        assert_eq!(Locator::parse("/products/"), Ok(Locator::Collection));
        assert_eq!(Locator::parse("products/42"), Ok(Locator::Item(42)));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for input in [
            "",
            "suppliers",
            "products/0",
            "products/-3",
            "products/abc",
            "products/7/images",
        ] {
            assert!(Locator::parse(input).is_err(), "`{input}` should not parse");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for locator in [Locator::Collection, Locator::Item(9)] {
            assert_eq!(Locator::parse(&locator.to_string()), Ok(locator));
        }
    }

    #[test]
    fn content_type_distinguishes_shapes() {
        assert_ne!(
            Locator::Collection.content_type(),
            Locator::Item(1).content_type()
        );
    }
}
