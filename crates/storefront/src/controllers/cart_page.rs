//! Cart page.
//!
//! Renders the line items and grand total, and wires the remove and clear
//! affordances. Every change re-renders the whole list from a fresh read of
//! the cart.

use std::rc::Rc;

use askama::Template;
use ascii_cart_core::ProductId;
use tracing::instrument;

use super::SharedCart;
use crate::dom::{Document, Selector};
use crate::error::{self, Result};
use crate::events::{EventBus, EventKind, EventTarget};
use crate::views::{CartItemsTemplate, CartView};

/// Drives `#cart-page`.
pub struct CartPageController {
    cart: SharedCart,
    document: Rc<dyn Document>,
    currency_symbol: String,
}

impl CartPageController {
    pub const PAGE_ID: &'static str = "cart-page";
    pub const ITEMS_ID: &'static str = "cart-items-container";
    pub const TOTAL_ID: &'static str = "cart-total";
    pub const CLEAR_BUTTON_ID: &'static str = "clear-cart-button";
    pub const REMOVE_BUTTON_CLASS: &'static str = "remove-from-cart-button";

    /// Render the cart and register handlers if this is the cart page.
    ///
    /// The page needs `#cart-page`, `#cart-items-container`, `#cart-total`,
    /// and `#clear-cart-button`; without all four the controller stays off.
    pub fn activate(
        document: &Rc<dyn Document>,
        cart: &SharedCart,
        bus: &mut EventBus,
        currency_symbol: &str,
    ) -> Option<Rc<Self>> {
        let required = [
            Self::PAGE_ID,
            Self::ITEMS_ID,
            Self::TOTAL_ID,
            Self::CLEAR_BUTTON_ID,
        ];
        if let Some(missing) = required
            .iter()
            .find(|id| !document.exists(&Selector::id(**id)))
        {
            if *missing != Self::PAGE_ID {
                tracing::debug!(missing, "Cart page is missing an element");
            }
            return None;
        }

        let controller = Rc::new(Self {
            cart: Rc::clone(cart),
            document: Rc::clone(document),
            currency_symbol: currency_symbol.to_string(),
        });

        let handler = Rc::clone(&controller);
        bus.on(
            EventKind::Click,
            Selector::id(Self::CLEAR_BUTTON_ID),
            move |_| {
                if let Err(e) = handler.clear() {
                    error::report("clear cart", &e);
                }
            },
        );

        let handler = Rc::clone(&controller);
        bus.on(
            EventKind::Click,
            Selector::class(Self::REMOVE_BUTTON_CLASS),
            move |event| {
                if let Err(e) = handler.remove(&event.target) {
                    error::report("remove from cart", &e);
                }
            },
        );

        if let Err(e) = controller.render() {
            error::report("render cart", &e);
        }

        tracing::debug!("Cart page controller active");
        Some(controller)
    }

    /// Render the current cart into the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the items template fails to render.
    pub fn render(&self) -> Result<()> {
        let view = CartView::new(&self.cart.get_all(), &self.currency_symbol);
        let html = CartItemsTemplate { cart: &view }.render()?;
        self.document.set_html(Self::ITEMS_ID, &html);
        self.document.set_text(Self::TOTAL_ID, &view.total_label());
        Ok(())
    }

    /// Remove the line named by the target's `data-id`, then re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be saved or re-rendered.
    #[instrument(skip_all, fields(id = target.data_attr("id")))]
    pub fn remove(&self, target: &EventTarget) -> Result<()> {
        match target.data_attr("id").map(ProductId::parse) {
            Some(Ok(id)) => self.cart.remove(&id)?,
            _ => tracing::warn!("Remove button without a usable data-id"),
        }
        self.render()
    }

    /// Empty the cart, then re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be saved or re-rendered.
    #[instrument(skip_all)]
    pub fn clear(&self) -> Result<()> {
        self.cart.clear()?;
        self.render()
    }
}
