//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ProductId, UnitPrice};

/// One distinct product entry in the cart, tracked with its own quantity.
///
/// Serializes to the persisted layout
/// `{"id", "name", "price", "image", "quantity"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier; unique within a cart.
    pub id: ProductId,
    /// Display label.
    pub name: String,
    /// Price of one unit.
    #[serde(rename = "price")]
    pub unit_price: UnitPrice,
    /// Image URL or path, opaque to the cart.
    pub image: String,
    /// Number of units, always at least 1 inside a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Create a line item for a single unit of a product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: UnitPrice,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            image: image.into(),
            quantity: 1,
        }
    }

    /// Returns the same item with a different quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.times(self.quantity)
    }
}
