//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each concern
//! gets its own handle and every command takes only the handles it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │ CartContext  │ │ CounterStore │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Arc<        │ │  Store<Cart  │ │  Store<      │ │  store name  │   │
//! │  │   Catalog>   │ │   Reducer>   │ │   Counter>   │ │  currency    │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: Immutable after startup                               │
//! │  • CartContext / CounterStore: Arc<Mutex<T>> inside Store              │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod store;

pub use cart::{CartContext, CartView};
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
pub use store::Store;

/// Handle for the counter widget.
pub type CounterStore = Store<storefront_core::CounterReducer>;
