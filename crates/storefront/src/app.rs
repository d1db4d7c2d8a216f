//! Page bootstrap.
//!
//! [`Storefront::mount`] is what runs once the page has loaded: it builds the
//! cart manager over the given storage, hooks up the cart-count indicator,
//! and activates whichever controllers the page has elements for. The host
//! then forwards user interactions through [`Storefront::dispatch`].

use std::rc::Rc;

use ascii_cart_core::{CartManager, CartStore, KeyValueStorage};
use tracing::instrument;

use crate::config::StorefrontConfig;
use crate::controllers::{
    CartCountIndicator, CartPageController, ContactController, ListingController, SharedCart,
};
use crate::dom::Document;
use crate::error::Result;
use crate::events::{EventBus, UiEvent};

/// Which controllers a page activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivePages {
    pub listing: bool,
    pub cart_page: bool,
    pub contact: bool,
}

/// A mounted page.
pub struct Storefront {
    cart: SharedCart,
    bus: EventBus,
    pages: ActivePages,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("bus", &self.bus)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}

impl Storefront {
    /// Run the page-load sequence against `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.cart_key` is not a valid storage key.
    #[instrument(skip_all, fields(cart_key = %config.cart_key))]
    pub fn mount(
        document: Rc<dyn Document>,
        storage: impl KeyValueStorage + 'static,
        config: &StorefrontConfig,
    ) -> Result<Self> {
        let storage: Box<dyn KeyValueStorage> = Box::new(storage);
        let mut manager = CartManager::new(CartStore::new(storage, config.cart_key.as_str())?);

        // The indicator shows on every page, not only the cart page
        let indicator = CartCountIndicator::new(Rc::clone(&document));
        indicator.refresh(manager.total_item_count());
        manager.subscribe(indicator);

        let cart: SharedCart = Rc::new(manager);
        let mut bus = EventBus::new();

        let pages = ActivePages {
            contact: ContactController::activate(&document, &mut bus).is_some(),
            listing: ListingController::activate(&document, &cart, &mut bus).is_some(),
            cart_page: CartPageController::activate(
                &document,
                &cart,
                &mut bus,
                &config.currency_symbol,
            )
            .is_some(),
        };

        tracing::info!(
            listing = pages.listing,
            cart_page = pages.cart_page,
            contact = pages.contact,
            handlers = bus.len(),
            "Storefront mounted"
        );

        Ok(Self { cart, bus, pages })
    }

    /// Forward a user interaction to the registered handlers.
    ///
    /// Returns how many handlers ran.
    pub fn dispatch(&self, event: &UiEvent) -> usize {
        self.bus.dispatch(event)
    }

    /// The cart manager backing this page.
    #[must_use]
    pub const fn cart(&self) -> &SharedCart {
        &self.cart
    }

    /// Which controllers are active.
    #[must_use]
    pub const fn pages(&self) -> ActivePages {
        self.pages
    }
}
