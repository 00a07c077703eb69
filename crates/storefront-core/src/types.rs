//! # Domain Types
//!
//! Core domain types shared by the catalog and the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │  CatalogItem    │  ADD ──► │    CartLine     │                      │
//! │  │  ─────────────  │          │  ─────────────  │                      │
//! │  │  sku (unique)   │          │  sku            │                      │
//! │  │  name           │          │  name           │                      │
//! │  │  price          │          │  price          │                      │
//! │  └─────────────────┘          │  qty            │                      │
//! │                               └─────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The SKU is the only identity; there is at most one cart line per SKU.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// A product offered in the catalog.
///
/// Populated once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Stock Keeping Unit - unique identifier.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,
}

impl CatalogItem {
    /// Creates a catalog item.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        CatalogItem {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a product snapshot plus the requested quantity.
///
/// `name` and `price` are the values carried by the most recent ADD for
/// this SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub sku: String,
    pub name: String,
    pub price: Money,
    pub qty: i64,
}

impl CartLine {
    /// Creates a line with a quantity of one.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        CartLine {
            sku: sku.into(),
            name: name.into(),
            price,
            qty: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.qty)
    }
}

impl From<&CatalogItem> for CartLine {
    fn from(item: &CatalogItem) -> Self {
        CartLine::new(item.sku.clone(), item.name.clone(), item.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new("item0001", "Widget", Money::from_cents(999));
        assert_eq!(line.line_total().cents(), 999);

        line.qty = 3;
        assert_eq!(line.line_total().cents(), 2997);
    }

    #[test]
    fn test_cart_line_from_catalog_item() {
        let item = CatalogItem::new("item0002", "Premium Widget", Money::from_cents(1999));
        let line = CartLine::from(&item);

        assert_eq!(line.sku, "item0002");
        assert_eq!(line.name, "Premium Widget");
        assert_eq!(line.price, Money::from_cents(1999));
        assert_eq!(line.qty, 1);
    }

    #[test]
    fn test_catalog_item_json_shape() {
        let item = CatalogItem::new("item0001", "Widget", Money::from_cents(999));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "sku": "item0001", "name": "Widget", "price": 999 })
        );
    }
}
