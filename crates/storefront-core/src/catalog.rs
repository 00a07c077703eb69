//! # Catalog Store
//!
//! The fixed list of purchasable items.
//!
//! ## Lifecycle
//! ```text
//! process start ──► Catalog::builtin() ──► parse + validate ──► read-only
//!                   (embedded JSON)                             for the rest
//!                                                               of the run
//! ```
//!
//! There are no mutation operations. A catalog that fails validation is
//! rejected as a whole.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::CatalogItem;
use crate::validation::{validate_price_cents, validate_product_name, validate_sku};

/// The catalog document compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Immutable, ordered sequence of catalog items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Loads the catalog embedded in the crate.
    pub fn builtin() -> CoreResult<Self> {
        Catalog::from_json(BUILTIN_CATALOG)
    }

    /// Parses a JSON array of `{sku, name, price}` objects.
    ///
    /// ```rust
    /// use storefront_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"[{"sku":"a0001","name":"A","price":100}]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(json).map_err(|e| CoreError::MalformedCatalog(e.to_string()))?;
        Catalog::new(items)
    }

    /// Builds a catalog from items, validating each one and SKU uniqueness.
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            validate_sku(&item.sku)?;
            validate_product_name(&item.name)?;
            validate_price_cents(item.price.cents())?;

            if !seen.insert(item.sku.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "sku".to_string(),
                    value: item.sku.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { items })
    }

    /// All items, in document order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Looks up an item by SKU.
    pub fn get(&self, sku: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 3);

        let skus: Vec<&str> = catalog.items().iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["item0001", "item0002", "item0003"]);

        let widget = catalog.get("item0001").unwrap();
        assert_eq!(widget.name, "Widget");
        assert_eq!(widget.price, Money::from_cents(999));
    }

    #[test]
    fn test_get_unknown_sku() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("item9999").is_none());
    }

    #[test]
    fn test_rejects_duplicate_sku() {
        let result = Catalog::new(vec![
            CatalogItem::new("item0001", "Widget", Money::from_cents(999)),
            CatalogItem::new("item0001", "Widget Again", Money::from_cents(1099)),
        ]);

        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = Catalog::new(vec![CatalogItem::new(
            "item0001",
            "Widget",
            Money::from_cents(-1),
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_sku_with_surrounding_whitespace() {
        let result = Catalog::from_json(r#"[{"sku":" item0001","name":"Widget","price":999}]"#);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = Catalog::from_json(r#"[{"sku":"item0001"}]"#);
        assert!(matches!(result, Err(CoreError::MalformedCatalog(_))));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
