//! # Catalog Commands

use storefront_core::CatalogItem;
use tracing::debug;

use crate::state::CatalogState;

/// Lists every catalog item in catalog order.
pub fn list_catalog(catalog: &CatalogState) -> Vec<CatalogItem> {
    debug!(count = catalog.items().len(), "list_catalog command");
    catalog.items().to_vec()
}
