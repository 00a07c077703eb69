//! # Checkout Receipt
//!
//! A frozen snapshot of the cart taken at the moment of SUBMIT.
//!
//! The receipt is built from the cart *before* the SUBMIT transition empties
//! it. Identity and time are passed in by the caller so that building a
//! receipt stays a pure function.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartState;
use crate::money::Money;
use crate::types::CartLine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    #[ts(as = "String")]
    pub order_id: Uuid,

    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,

    /// Lines in display order.
    pub lines: Vec<CartLine>,

    pub total_items: i64,

    pub total: Money,
}

impl Receipt {
    pub fn from_cart(cart: &CartState, order_id: Uuid, submitted_at: DateTime<Utc>) -> Self {
        Receipt {
            order_id,
            submitted_at,
            lines: cart.display_order(),
            total_items: cart.total_items(),
            total: cart.total_price(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, CartReducer};
    use crate::reducer::Reducer;
    use chrono::TimeZone;

    #[test]
    fn test_receipt_snapshots_cart() {
        let add = |sku: &str, cents: i64| CartAction::Add {
            sku: sku.to_string(),
            name: sku.to_uppercase(),
            price: Money::from_cents(cents),
        };
        let cart = CartReducer::replay(
            &CartState::new(),
            vec![add("item0002", 1999), add("item0001", 999), add("item0001", 999)],
        )
        .unwrap();

        let order_id = Uuid::nil();
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let receipt = Receipt::from_cart(&cart, order_id, at);

        assert_eq!(receipt.order_id, order_id);
        assert_eq!(receipt.submitted_at, at);
        assert_eq!(receipt.total_items, 3);
        assert_eq!(receipt.total, Money::from_cents(3997));
        assert_eq!(receipt.lines[0].sku, "item0001");
        assert_eq!(receipt.lines[1].sku, "item0002");
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::from_cart(&CartState::new(), Uuid::nil(), Utc::now());
        assert!(receipt.is_empty());
        assert!(receipt.total.is_zero());
    }
}
