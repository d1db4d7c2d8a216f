//! Header cart-count indicator.

use std::rc::Rc;

use ascii_cart_core::{Cart, CartObserver};

use crate::dom::Document;

/// Keeps `#cart-count` in step with the number of units in the cart.
pub struct CartCountIndicator {
    document: Rc<dyn Document>,
}

impl CartCountIndicator {
    /// Id of the element showing the count.
    pub const ELEMENT_ID: &'static str = "cart-count";

    #[must_use]
    pub fn new(document: Rc<dyn Document>) -> Self {
        Self { document }
    }

    /// Write `count` into the indicator, if this page has one.
    pub fn refresh(&self, count: u64) {
        if !self.document.set_text(Self::ELEMENT_ID, &count.to_string()) {
            tracing::trace!("No cart count indicator on this page");
        }
    }
}

impl CartObserver for CartCountIndicator {
    fn cart_changed(&self, cart: &Cart) {
        self.refresh(cart.item_count());
    }
}
