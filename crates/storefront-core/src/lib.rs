//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds the catalog, the cart state machine and the counter
//! widget as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (external)                        │   │
//! │  │         Catalog list ──► Cart ──► Checkout ──► Counter          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            apps/storefront (state handles, commands)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reduce(state, action)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  counter  │  │   money   │  │   │
//! │  │   │  Catalog  │  │ CartState │  │ Counter-  │  │   Money   │  │   │
//! │  │   │           │  │ Reducer   │  │  State    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `CatalogItem`, `CartLine`
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The static catalog store
//! - [`action`] - Wire shape of dispatched actions
//! - [`reducer`] - The `Reducer` trait
//! - [`cart`] - Cart state machine and derived values
//! - [`counter`] - Counter widget state machine
//! - [`receipt`] - Checkout snapshot
//! - [`validation`] - Catalog data checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{CartAction, CartReducer, CartState, Money, Reducer};
//!
//! let cart = CartReducer::reduce(
//!     &CartState::new(),
//!     CartAction::Add {
//!         sku: "item0001".to_string(),
//!         name: "Widget".to_string(),
//!         price: Money::from_cents(999),
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(cart.total_items(), 1);
//! assert_eq!(cart.total_price().to_string(), "$9.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod cart;
pub mod catalog;
pub mod counter;
pub mod error;
pub mod money;
pub mod receipt;
pub mod reducer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::{ActionPayload, RawAction};
pub use cart::{CartAction, CartReducer, CartState};
pub use catalog::Catalog;
pub use counter::{CounterAction, CounterReducer, CounterState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::Receipt;
pub use reducer::Reducer;
pub use types::*;
