//! Core types for the ASCII cart.
//!
//! This module provides type-safe wrappers for the cart's domain concepts.

pub mod contact;
pub mod id;
pub mod item;
pub mod price;

pub use contact::{ContactError, ContactSubmission, Email, EmailError};
pub use id::{ProductId, ProductIdError};
pub use item::CartItem;
pub use price::{PriceError, UnitPrice};
