//! # Catalog State
//!
//! Read-only catalog shared by every command that lists products.
//!
//! ## Thread Safety
//! The catalog never changes after startup, so an `Arc` is enough; no lock.

use std::sync::Arc;

use storefront_core::{Catalog, CatalogItem, CoreResult};

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the catalog compiled into storefront-core.
    pub fn builtin() -> CoreResult<Self> {
        Ok(CatalogState::new(Catalog::builtin()?))
    }

    pub fn items(&self) -> &[CatalogItem] {
        self.catalog.items()
    }

    pub fn get(&self, sku: &str) -> Option<&CatalogItem> {
        self.catalog.get(sku)
    }
}
