//! ASCII Cart Core - cart state and durable storage.
//!
//! This crate holds everything about the shopping cart that does not depend
//! on a UI. It is shared by:
//! - `storefront` - page controllers that drive the cart from UI events
//! - `cli` - a headless tool for inspecting and editing a stored cart
//!
//! # Architecture
//!
//! Bottom-up:
//!
//! - [`storage`] - `localStorage`-shaped key-value backends (memory, files)
//! - [`store`] - the durable store adapter for the single cart slot
//! - [`cart`] - the cart manager: load, mutate, store, notify
//! - [`types`] - product ids, prices, line items, contact submissions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod storage;
pub mod store;
pub mod types;

pub use cart::{Cart, CartError, CartManager, CartObserver, CartSummary};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{CartStore, DEFAULT_CART_KEY, StoreError};
pub use types::*;
