//! Page flows: mount pages over shared file storage and drive them with
//! UI events, as a visitor moving between pages would.

#![allow(clippy::unwrap_used)]

use ascii_cart_integration_tests::{TestShop, cart_page, contact_page, listing_page};
use ascii_cart_storefront::{ActivePages, EventTarget, UiEvent};

fn add_button(id: &str, name: &str, price: &str) -> UiEvent {
    UiEvent::click(
        EventTarget::with_class("add-to-cart-button")
            .data("id", id)
            .data("name", name)
            .data("price", price)
            .data("image", format!("/img/{id}.png")),
    )
}

fn remove_button(id: &str) -> UiEvent {
    UiEvent::click(EventTarget::with_class("remove-from-cart-button").data("id", id))
}

#[test]
fn test_shopping_trip() {
    let shop = TestShop::new().unwrap();

    // Browse and add
    let listing = listing_page();
    let app = shop.mount(&listing).unwrap();
    assert!(app.pages().listing);
    app.dispatch(&add_button("mug", "ASCII Mug", "39.90"));
    app.dispatch(&add_button("tee", "ASCII Tee", "59.00"));
    app.dispatch(&add_button("mug", "ASCII Mug", "39.90"));
    assert_eq!(listing.text("cart-count").as_deref(), Some("3"));
    assert_eq!(
        listing.alerts(),
        [
            "ASCII Mug foi adicionado ao carrinho!",
            "ASCII Tee foi adicionado ao carrinho!",
            "ASCII Mug foi adicionado ao carrinho!",
        ]
    );

    // Review the cart
    let page = cart_page();
    let app = shop.mount(&page).unwrap();
    assert!(app.pages().cart_page);
    assert_eq!(page.text("cart-count").as_deref(), Some("3"));
    let html = page.html("cart-items-container").unwrap();
    assert!(html.contains("ASCII Mug (x2)"));
    assert!(html.contains("R$ 79.80"));
    assert!(html.contains("ASCII Tee (x1)"));
    assert_eq!(page.text("cart-total").as_deref(), Some("Total: R$ 138.80"));

    // Drop the mug
    app.dispatch(&remove_button("mug"));
    assert_eq!(page.text("cart-count").as_deref(), Some("1"));
    assert!(!page.html("cart-items-container").unwrap().contains("ASCII Mug"));
    assert_eq!(page.text("cart-total").as_deref(), Some("Total: R$ 59.00"));

    // The change persists to the next page
    let listing = listing_page();
    shop.mount(&listing).unwrap();
    assert_eq!(listing.text("cart-count").as_deref(), Some("1"));
}

#[test]
fn test_clear_from_cart_page() {
    let shop = TestShop::new().unwrap();
    let listing = listing_page();
    let app = shop.mount(&listing).unwrap();
    app.dispatch(&add_button("mug", "ASCII Mug", "39.90"));

    let page = cart_page();
    let app = shop.mount(&page).unwrap();
    app.dispatch(&UiEvent::click(EventTarget::with_id("clear-cart-button")));

    assert_eq!(page.text("cart-count").as_deref(), Some("0"));
    assert!(page.html("cart-items-container").unwrap().contains("Seu carrinho está vazio."));
    assert_eq!(page.text("cart-total").as_deref(), Some("Total: R$ 0.00"));
    assert!(shop.cart().unwrap().get_all().is_empty());
}

#[test]
fn test_product_names_are_escaped_on_cart_page() {
    let shop = TestShop::new().unwrap();
    let app = shop.mount(&listing_page()).unwrap();
    app.dispatch(&add_button("x", "<img src=x onerror=alert(1)>", "1"));

    let page = cart_page();
    shop.mount(&page).unwrap();
    let html = page.html("cart-items-container").unwrap();
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;img src=x"));
}

#[test]
fn test_contact_page_has_no_cart_controllers() {
    let shop = TestShop::new().unwrap();
    let page = contact_page();
    let app = shop.mount(&page).unwrap();
    assert_eq!(
        app.pages(),
        ActivePages {
            contact: true,
            ..ActivePages::default()
        }
    );

    // Add buttons do nothing off the listing page
    assert_eq!(app.dispatch(&add_button("mug", "ASCII Mug", "39.90")), 0);
    assert!(shop.cart().unwrap().get_all().is_empty());

    page.set_value("name", "Ana");
    page.set_value("email", "ana@example.com");
    page.set_value("message", "Oi!");
    assert_eq!(app.dispatch(&UiEvent::submit(EventTarget::with_id("contact-form"))), 1);
    assert_eq!(page.alerts(), ["Obrigado pela sua mensagem!"]);
    assert_eq!(page.element("name").unwrap().value, "");
}

#[test]
fn test_bad_markup_leaves_cart_untouched() {
    let shop = TestShop::new().unwrap();
    let listing = listing_page();
    let app = shop.mount(&listing).unwrap();

    app.dispatch(&add_button("mug", "ASCII Mug", "grátis"));
    app.dispatch(&add_button("", "Nameless", "1"));

    assert!(listing.alerts().is_empty());
    assert_eq!(listing.text("cart-count").as_deref(), Some("0"));
    assert!(!shop.cart_file().exists());
}

#[test]
fn test_corrupted_storage_still_mounts() {
    let shop = TestShop::new().unwrap();
    std::fs::write(shop.cart_file(), "definitely not json").unwrap();

    let page = cart_page();
    let app = shop.mount(&page).unwrap();
    assert!(app.pages().cart_page);
    assert_eq!(page.text("cart-count").as_deref(), Some("0"));
    assert_eq!(page.text("cart-total").as_deref(), Some("Total: R$ 0.00"));
}
