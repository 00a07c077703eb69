//! # Cart Context
//!
//! The read/dispatch capability handed to everything that shows or changes
//! the cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Context Operations                              │
//! │                                                                         │
//! │  View Action             Context Call             Cart State Change     │
//! │  ───────────             ────────────             ─────────────────     │
//! │                                                                         │
//! │  Click "Add" ──────────► dispatch(ADD) ─────────► qty += 1 / new line   │
//! │                                                                         │
//! │  Change Quantity ──────► dispatch(QUANTITY) ────► line.qty = n          │
//! │                                                                         │
//! │  Click Remove ─────────► dispatch(REMOVE) ──────► line dropped          │
//! │                                                                         │
//! │  Place Order ──────────► dispatch(SUBMIT) ──────► lines cleared         │
//! │                                                                         │
//! │  Show Cart ────────────► view() ────────────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The context is created once at startup and passed explicitly to the
//! commands that need it. It holds no logic of its own: transitions belong
//! to `CartReducer`, derived values to `CartState`.

use serde::{Deserialize, Serialize};
use storefront_core::{CartAction, CartLine, CartReducer, CartState, CoreResult, RawAction};

use super::store::Store;

/// What the view layer reads: derived totals plus lines in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub total_items: i64,
    pub total_price: String,
    pub cart: Vec<CartLine>,
}

/// Shareable cart handle.
#[derive(Debug, Clone)]
pub struct CartContext {
    store: Store<CartReducer>,
    currency_symbol: String,
}

impl CartContext {
    /// Creates a context around an empty cart.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        CartContext {
            store: Store::new(),
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Applies a typed cart action.
    pub fn dispatch(&self, action: CartAction) -> CoreResult<()> {
        self.store.dispatch(action)
    }

    /// Parses and applies a wire action.
    pub fn dispatch_raw(&self, raw: RawAction) -> CoreResult<()> {
        self.store.dispatch_raw(raw)
    }

    /// Reads the cart and applies an action atomically.
    pub fn read_then_dispatch<F, T>(&self, action: CartAction, read: F) -> CoreResult<T>
    where
        F: FnOnce(&CartState) -> T,
    {
        self.store.read_then_dispatch(action, read)
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.store.with_state(CartState::total_items)
    }

    /// Total price as currency text, e.g. `$39.97`.
    pub fn total_price(&self) -> String {
        self.store
            .with_state(|cart| cart.total_price().format_with_symbol(&self.currency_symbol))
    }

    /// Lines in display order.
    pub fn cart(&self) -> Vec<CartLine> {
        self.store.with_state(CartState::display_order)
    }

    /// All derived values, read under one lock.
    pub fn view(&self) -> CartView {
        self.store.with_state(|cart| CartView {
            total_items: cart.total_items(),
            total_price: cart.total_price().format_with_symbol(&self.currency_symbol),
            cart: cart.display_order(),
        })
    }
}
