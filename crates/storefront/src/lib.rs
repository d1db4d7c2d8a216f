//! ASCII Cart Storefront library.
//!
//! Page controllers for the ASCII shop, written against an abstract
//! [`dom::Document`] and [`events::EventBus`] so they run the same in a
//! browser binding, in tests, and headless.
//!
//! # Pages
//!
//! - Every page: the header cart-count indicator
//! - Product listing (`.product-grid`): add-to-cart buttons
//! - Cart page (`#cart-page`): line items, total, remove, clear
//! - Contact page (`#contact-form`): validated, acknowledged submissions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod events;
pub mod views;

pub use app::{ActivePages, Storefront};
pub use config::{ConfigError, StorefrontConfig};
pub use dom::{Document, MemoryDocument, Selector};
pub use error::AppError;
pub use events::{EventBus, EventKind, EventTarget, UiEvent};
