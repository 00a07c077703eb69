//! # Cart State Machine
//!
//! Owns the cart's line items and applies the four cart transitions.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action     Payload            Effect                     Failure       │
//! │  ────────   ────────────────   ───────────────────────   ────────────  │
//! │  ADD        sku, name, price   qty += 1, or new line      no payload    │
//! │                                with qty = 1                             │
//! │  REMOVE     sku                drop the line (no-op if    no payload    │
//! │                                absent)                                  │
//! │  QUANTITY   sku, qty           qty = given value          no payload,   │
//! │                                                           line missing  │
//! │  SUBMIT     -                  clear every line           never         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Values
//! `total_items`, `total_price` and `display_order` are recomputed on every
//! call. Nothing is cached, so they can never go stale.

use serde::{Deserialize, Serialize};

use crate::action::{required, RawAction};
use crate::error::{CoreError, CoreResult};
use crate::money::{saturate_i64, Money};
use crate::reducer::Reducer;
use crate::types::CartLine;

/// Number of trailing SKU characters that form the display sort key.
pub const SORT_KEY_LEN: usize = 4;

// =============================================================================
// Actions
// =============================================================================

/// A validated cart action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product.
    Add {
        sku: String,
        name: String,
        price: Money,
    },
    /// Drop the line for a SKU.
    Remove { sku: String },
    /// Replace the quantity of an existing line.
    Quantity { sku: String, qty: i64 },
    /// Check out: empty the cart.
    Submit,
}

impl CartAction {
    pub const ADD: &'static str = "ADD";
    pub const REMOVE: &'static str = "REMOVE";
    pub const QUANTITY: &'static str = "QUANTITY";
    pub const SUBMIT: &'static str = "SUBMIT";

    /// The wire name of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => Self::ADD,
            CartAction::Remove { .. } => Self::REMOVE,
            CartAction::Quantity { .. } => Self::QUANTITY,
            CartAction::Submit => Self::SUBMIT,
        }
    }
}

impl TryFrom<RawAction> for CartAction {
    type Error = CoreError;

    /// Parses the wire shape.
    ///
    /// The `type` is checked before the payload, so an unknown type is
    /// reported as such even when the payload is also missing. A payload
    /// `qty` on ADD is ignored.
    fn try_from(raw: RawAction) -> CoreResult<Self> {
        match raw.kind.as_str() {
            Self::ADD => {
                let payload = raw.require_payload()?;
                Ok(CartAction::Add {
                    sku: required(payload.sku, "sku")?,
                    name: required(payload.name, "name")?,
                    price: required(payload.price, "price")?,
                })
            }
            Self::REMOVE => {
                let payload = raw.require_payload()?;
                Ok(CartAction::Remove {
                    sku: required(payload.sku, "sku")?,
                })
            }
            Self::QUANTITY => {
                let payload = raw.require_payload()?;
                Ok(CartAction::Quantity {
                    sku: required(payload.sku, "sku")?,
                    qty: required(payload.qty, "qty")?,
                })
            }
            Self::SUBMIT => Ok(CartAction::Submit),
            _ => Err(CoreError::UnrecognizedAction { kind: raw.kind }),
        }
    }
}

// =============================================================================
// State
// =============================================================================

/// The cart: at most one line per SKU, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a SKU, if any.
    pub fn line(&self, sku: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.sku == sku)
    }

    /// Number of distinct SKUs.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines, saturating at the `i64` bounds.
    pub fn total_items(&self) -> i64 {
        saturate_i64(self.lines.iter().map(|l| l.qty as i128).sum())
    }

    /// Sum of `qty × price` across all lines, saturating like [`Money`] does.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines sorted by the numeric suffix of their SKU.
    ///
    /// The sort is stable. SKUs whose key does not parse sort after every
    /// numeric key, in insertion order.
    ///
    /// ```rust
    /// use storefront_core::cart::{CartAction, CartReducer, CartState};
    /// use storefront_core::money::Money;
    /// use storefront_core::reducer::Reducer;
    ///
    /// let add = |sku: &str| CartAction::Add {
    ///     sku: sku.to_string(),
    ///     name: "Widget".to_string(),
    ///     price: Money::from_cents(999),
    /// };
    /// let cart = CartReducer::replay(
    ///     &CartState::new(),
    ///     vec![add("item0003"), add("item0001"), add("item0002")],
    /// )
    /// .unwrap();
    ///
    /// let order: Vec<String> = cart.display_order().into_iter().map(|l| l.sku).collect();
    /// assert_eq!(order, ["item0001", "item0002", "item0003"]);
    /// ```
    pub fn display_order(&self) -> Vec<CartLine> {
        let mut lines = self.lines.clone();
        lines.sort_by_key(|line| match sku_sort_key(&line.sku) {
            Some(key) => (false, key),
            None => (true, 0),
        });
        lines
    }
}

/// Parses the last four characters of a SKU as a decimal number.
///
/// A SKU shorter than four characters is parsed whole. Returns `None` unless
/// the suffix is made of ASCII digits only, so a sign (`item-001`) does not
/// produce a negative key.
///
/// ```rust
/// use storefront_core::cart::sku_sort_key;
///
/// assert_eq!(sku_sort_key("item0042"), Some(42));
/// assert_eq!(sku_sort_key("7"), Some(7));
/// assert_eq!(sku_sort_key("item-abc"), None);
/// assert_eq!(sku_sort_key("item-001"), None);
/// ```
pub fn sku_sort_key(sku: &str) -> Option<i64> {
    let skip = sku.chars().count().saturating_sub(SORT_KEY_LEN);
    let suffix: String = sku.chars().skip(skip).collect();
    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

// =============================================================================
// Reducer
// =============================================================================

/// The cart state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    const NAME: &'static str = "cart";

    fn reduce(state: &CartState, action: CartAction) -> CoreResult<CartState> {
        let mut lines = state.lines.clone();

        match action {
            CartAction::Add { sku, name, price } => {
                match lines.iter_mut().find(|l| l.sku == sku) {
                    Some(line) => {
                        line.qty = line.qty.saturating_add(1);
                        line.name = name;
                        line.price = price;
                    }
                    None => lines.push(CartLine::new(sku, name, price)),
                }
            }
            CartAction::Remove { sku } => {
                lines.retain(|l| l.sku != sku);
            }
            CartAction::Quantity { sku, qty } => {
                let line = lines
                    .iter_mut()
                    .find(|l| l.sku == sku)
                    .ok_or(CoreError::LineNotFound { sku })?;
                line.qty = qty;
            }
            CartAction::Submit => lines.clear(),
        }

        Ok(CartState { lines })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
