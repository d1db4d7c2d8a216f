//! Page controllers.
//!
//! Each controller activates only when the elements it drives exist on the
//! current page; a missing element means the feature is absent, not broken.

pub mod cart_page;
pub mod contact;
pub mod indicator;
pub mod listing;

use std::rc::Rc;

use ascii_cart_core::{CartManager, KeyValueStorage};

pub use cart_page::CartPageController;
pub use contact::ContactController;
pub use indicator::CartCountIndicator;
pub use listing::ListingController;

/// The cart manager as shared between controllers of one page.
pub type SharedCart = Rc<CartManager<Box<dyn KeyValueStorage>>>;
