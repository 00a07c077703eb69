//! # Commands Module
//!
//! All commands exposed to the view layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Catalog listing
//! ├── cart.rs     ◄─── Cart reads, dispatch, checkout
//! ├── counter.rs  ◄─── Counter widget
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_catalog(catalog: &CatalogState)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartContext)
//!
//! // Cart + clock/ids for the receipt
//! fn submit_order(cart: &CartContext)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod counter;
