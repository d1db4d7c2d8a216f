//! Product listing page.
//!
//! Every `.add-to-cart-button` describes its product through data
//! attributes:
//!
//! ```html
//! <button class="add-to-cart-button"
//!         data-id="mug" data-name="ASCII Mug" data-price="39.90" data-image="mug.png">
//! ```
//!
//! A click adds one unit of that product to the cart.

use std::rc::Rc;

use ascii_cart_core::{CartItem, PriceError, ProductId, ProductIdError, UnitPrice};
use thiserror::Error;
use tracing::instrument;

use super::SharedCart;
use crate::dom::{Document, Selector};
use crate::error::{self, Result};
use crate::events::{EventBus, EventKind, EventTarget};
use crate::views;

/// Problems with an add-to-cart affordance's data attributes.
#[derive(Debug, Error)]
pub enum ProductMarkupError {
    #[error("missing attribute {0}")]
    MissingAttribute(&'static str),
    #[error("bad data-id: {0}")]
    Id(#[from] ProductIdError),
    #[error("bad data-price: {0}")]
    Price(#[from] PriceError),
}

/// Read the product described by an add-to-cart affordance.
///
/// # Errors
///
/// Returns a [`ProductMarkupError`] if `data-id`, `data-name`, or
/// `data-price` is missing or invalid. A missing `data-image` is allowed.
pub fn product_from_target(target: &EventTarget) -> std::result::Result<CartItem, ProductMarkupError> {
    let attr = |name: &'static str, label: &'static str| {
        target
            .data_attr(name)
            .ok_or(ProductMarkupError::MissingAttribute(label))
    };

    let id = ProductId::parse(attr("id", "data-id")?)?;
    let name = attr("name", "data-name")?;
    let price = UnitPrice::parse(attr("price", "data-price")?)?;
    let image = target.data_attr("image").unwrap_or_default();

    Ok(CartItem::new(id, name, price, image))
}

/// Wires add-to-cart buttons to the cart.
pub struct ListingController {
    cart: SharedCart,
    document: Rc<dyn Document>,
}

impl ListingController {
    /// Marks a page as a product listing.
    pub const GRID_CLASS: &'static str = "product-grid";
    /// Class of each add-to-cart affordance.
    pub const ADD_BUTTON_CLASS: &'static str = "add-to-cart-button";

    /// Register click handlers if the page has a product grid.
    pub fn activate(
        document: &Rc<dyn Document>,
        cart: &SharedCart,
        bus: &mut EventBus,
    ) -> Option<Rc<Self>> {
        if !document.exists(&Selector::class(Self::GRID_CLASS)) {
            return None;
        }

        let controller = Rc::new(Self {
            cart: Rc::clone(cart),
            document: Rc::clone(document),
        });

        let handler = Rc::clone(&controller);
        bus.on(
            EventKind::Click,
            Selector::class(Self::ADD_BUTTON_CLASS),
            move |event| {
                if let Err(e) = handler.add_to_cart(&event.target) {
                    error::report("add to cart", &e);
                }
            },
        );

        tracing::debug!("Listing controller active");
        Some(controller)
    }

    /// Add one unit of the product behind `target` and acknowledge it.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup is unusable or the cart cannot be saved.
    #[instrument(skip_all, fields(id = target.data_attr("id")))]
    pub fn add_to_cart(&self, target: &EventTarget) -> Result<()> {
        let item = product_from_target(target)?;
        let name = item.name.clone();
        self.cart.add(item)?;
        self.document.alert(&views::item_added_message(&name));
        Ok(())
    }
}
