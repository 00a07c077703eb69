//! # Cart Commands
//!
//! Commands for reading and changing the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Receipt  │                         │
//! │  │  Cart    │     │          │     │          │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲                │                │                               │
//! │       │           add_to_cart      submit_order                        │
//! │       │           dispatch(...)         │                               │
//! │       │                                 │                               │
//! │       └─────────────────────────────────┘                               │
//! │                   (cart emptied by SUBMIT)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use storefront_core::{CartAction, RawAction, Receipt};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ApiError, ErrorCode};
use crate::state::{CartContext, CartView, CatalogState};

/// Gets the current cart: totals plus lines in display order.
///
/// ```text
/// { "totalItems": 3, "totalPrice": "$39.97", "cart": [ ... ] }
/// ```
pub fn get_cart(cart: &CartContext) -> CartView {
    debug!("get_cart command");
    cart.view()
}

/// Dispatches a wire action (`ADD`, `REMOVE`, `QUANTITY`, `SUBMIT`) and
/// returns the updated cart.
pub fn dispatch(cart: &CartContext, action: RawAction) -> Result<CartView, ApiError> {
    debug!(kind = %action.kind, "dispatch command");
    cart.dispatch_raw(action)?;
    Ok(cart.view())
}

/// Adds one unit of a catalog item, taking name and price from the catalog.
///
/// ## User Workflow
/// ```text
/// User clicks "Add to Cart" on a catalog row
///      │
///      ▼
/// add_to_cart("item0002")
///      │
///      ├── not in catalog? → NOT_FOUND
///      │
///      ▼
/// ADD { sku, name, price } ──► qty += 1 or new line
/// ```
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartContext,
    sku: &str,
) -> Result<CartView, ApiError> {
    debug!(%sku, "add_to_cart command");

    let item = catalog.get(sku).ok_or_else(|| {
        ApiError::new(ErrorCode::NotFound, format!("Catalog item not found: {}", sku))
    })?;

    cart.dispatch(CartAction::Add {
        sku: item.sku.clone(),
        name: item.name.clone(),
        price: item.price,
    })?;

    Ok(cart.view())
}

/// Checks out: snapshots the cart into a receipt and empties it.
///
/// The snapshot and the SUBMIT happen under one lock, so the receipt always
/// matches exactly what was cleared. An empty cart yields an empty receipt.
pub fn submit_order(cart: &CartContext) -> Result<Receipt, ApiError> {
    debug!("submit_order command");

    let order_id = Uuid::new_v4();
    let submitted_at = Utc::now();
    let receipt = cart.read_then_dispatch(CartAction::Submit, |state| {
        Receipt::from_cart(state, order_id, submitted_at)
    })?;

    info!(
        order_id = %receipt.order_id,
        total_items = receipt.total_items,
        total = %receipt.total,
        "order submitted"
    );

    Ok(receipt)
}
