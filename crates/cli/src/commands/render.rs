//! Headless rendering of the cart page.

use std::io::Write;
use std::rc::Rc;

use ascii_cart_core::KeyValueStorage;
use ascii_cart_storefront::controllers::CartPageController;
use ascii_cart_storefront::{MemoryDocument, Storefront, StorefrontConfig};

use super::CommandError;

/// Mount the cart page over `storage` and print what it rendered.
///
/// # Errors
///
/// Returns an error if the storefront cannot be mounted or output cannot be
/// written.
pub fn cart_page(
    storage: impl KeyValueStorage + 'static,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let doc = Rc::new(
        MemoryDocument::new()
            .with_element(CartPageController::PAGE_ID)
            .with_element(CartPageController::ITEMS_ID)
            .with_element(CartPageController::TOTAL_ID)
            .with_element(CartPageController::CLEAR_BUTTON_ID),
    );
    let app = Storefront::mount(doc.clone(), storage, config)?;
    if !app.pages().cart_page {
        return Err(CommandError::InvalidArgument(
            "cart page did not activate".to_string(),
        ));
    }

    let html = doc.html(CartPageController::ITEMS_ID).unwrap_or_default();
    let total = doc.text(CartPageController::TOTAL_ID).unwrap_or_default();
    writeln!(out, "{}", html.trim())?;
    writeln!(out, "{total}")?;
    Ok(())
}
