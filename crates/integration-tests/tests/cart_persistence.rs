//! Cart semantics over the file-backed store.
//!
//! Each call to `shop.cart()` opens the storage anew, the way a fresh page
//! load would, so these tests also check what survives between pages.

#![allow(clippy::unwrap_used)]

use std::fs;

use ascii_cart_core::{CartItem, ProductId, UnitPrice};
use ascii_cart_integration_tests::TestShop;
use rust_decimal::Decimal;
use serde_json::Value;

fn product(id: &str, name: &str, price: &str) -> CartItem {
    CartItem::new(
        ProductId::parse(id).unwrap(),
        name,
        UnitPrice::parse(price).unwrap(),
        format!("{id}.png"),
    )
}

fn id(id: &str) -> ProductId {
    ProductId::parse(id).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_add_same_product_twice() {
    let shop = TestShop::new().unwrap();

    shop.cart().unwrap().add(product("a", "Widget", "10.00")).unwrap();
    shop.cart().unwrap().add(product("a", "Widget", "10.00")).unwrap();

    let cart = shop.cart().unwrap();
    let items = cart.get_all();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "a");
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].image, "a.png");
    assert_eq!(cart.total_value(), Decimal::new(20, 0));
}

#[test]
fn test_add_two_then_remove_first() {
    let shop = TestShop::new().unwrap();
    let cart = shop.cart().unwrap();

    cart.add(product("a", "Widget", "10")).unwrap();
    cart.add(product("b", "Gadget", "5")).unwrap();
    cart.remove(&id("a")).unwrap();

    let cart = shop.cart().unwrap();
    let items = cart.get_all();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "b");
    assert_eq!(items[0].quantity, 1);
    assert_eq!(cart.total_value(), Decimal::new(5, 0));
}

#[test]
fn test_absent_slot_reads_empty() {
    let shop = TestShop::new().unwrap();
    let cart = shop.cart().unwrap();

    assert!(cart.get_all().is_empty());
    assert_eq!(cart.total_item_count(), 0);
    assert_eq!(cart.total_value(), Decimal::ZERO);
    assert!(!shop.cart_file().exists());
}

#[test]
fn test_corrupted_slot_reads_empty() {
    let shop = TestShop::new().unwrap();
    for garbage in ["", "not json", "{\"id\":\"a\"}", "[1, 2", "null", "42"] {
        fs::write(shop.cart_file(), garbage).unwrap();
        let cart = shop.cart().unwrap();
        assert!(cart.get_all().is_empty(), "garbage {garbage:?}");
        assert_eq!(cart.total_value(), Decimal::ZERO);
    }
}

#[test]
fn test_corrupted_slot_is_replaced_on_next_write() {
    let shop = TestShop::new().unwrap();
    fs::write(shop.cart_file(), "{{{{").unwrap();

    shop.cart().unwrap().add(product("a", "Widget", "1")).unwrap();

    let stored: Value = serde_json::from_str(&fs::read_to_string(shop.cart_file()).unwrap()).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_count_matches_adds_and_ids_stay_unique() {
    let shop = TestShop::new().unwrap();
    let ids = ["a", "b", "a", "c", "b", "a", "d", "c"];
    for i in ids {
        shop.cart().unwrap().add(product(i, i, "1.5")).unwrap();
    }

    let cart = shop.cart().unwrap();
    let items = cart.get_all();
    assert_eq!(cart.total_item_count(), ids.len() as u64);

    let mut seen: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    seen.dedup();
    assert_eq!(seen, ["a", "b", "c", "d"]);
    assert_eq!(items.len(), 4);
    assert_eq!(cart.total_value(), Decimal::new(12, 0));
}

#[test]
fn test_existing_line_keeps_its_fields() {
    let shop = TestShop::new().unwrap();
    let cart = shop.cart().unwrap();

    cart.add(product("a", "Widget", "10")).unwrap();
    let mut changed = product("a", "Renamed", "99");
    changed.image = "other.png".to_string();
    cart.add(changed).unwrap();

    let items = shop.cart().unwrap().get_all();
    assert_eq!(items[0].name, "Widget");
    assert_eq!(items[0].unit_price, UnitPrice::parse("10").unwrap());
    assert_eq!(items[0].image, "a.png");
    assert_eq!(items[0].quantity, 2);
}

#[test]
fn test_new_line_starts_at_one_whatever_the_quantity() {
    let shop = TestShop::new().unwrap();
    shop.cart()
        .unwrap()
        .add(product("a", "Widget", "10").with_quantity(7))
        .unwrap();

    assert_eq!(shop.cart().unwrap().get_all()[0].quantity, 1);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let shop = TestShop::new().unwrap();
    let cart = shop.cart().unwrap();
    cart.add(product("a", "Widget", "10")).unwrap();
    let before = fs::read_to_string(shop.cart_file()).unwrap();

    cart.remove(&id("missing")).unwrap();

    assert_eq!(cart.get_all().len(), 1);
    let after: Value = serde_json::from_str(&fs::read_to_string(shop.cart_file()).unwrap()).unwrap();
    let before: Value = serde_json::from_str(&before).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_clear_empties_everything() {
    let shop = TestShop::new().unwrap();
    let cart = shop.cart().unwrap();
    cart.add(product("a", "Widget", "10")).unwrap();
    cart.add(product("b", "Gadget", "5")).unwrap();

    cart.clear().unwrap();

    let cart = shop.cart().unwrap();
    assert!(cart.get_all().is_empty());
    assert_eq!(cart.total_item_count(), 0);
    assert_eq!(cart.total_value(), Decimal::ZERO);
}

#[test]
fn test_store_then_load_preserves_order_and_content() {
    let shop = TestShop::new().unwrap();
    let items = vec![
        product("z", "Last alphabetically", "3.33").with_quantity(2),
        product("a", "First alphabetically", "0.01"),
        product("m", "Middle", "100").with_quantity(5),
    ];

    shop.cart().unwrap().store().store(&items).unwrap();

    assert_eq!(shop.cart().unwrap().get_all(), items);
}

#[test]
fn test_price_limits_survive_page_loads() {
    let shop = TestShop::new().unwrap();
    let gold = product("gold", "Gold Bar", "1000000000");
    let dust = product("dust", "Gold Dust", "0.0001");
    let odd = product("odd", "Odd Lot", "987654321.1234");

    for item in [&gold, &gold, &dust, &odd] {
        shop.cart().unwrap().add(item.clone()).unwrap();
    }

    let cart = shop.cart().unwrap();
    let items = cart.get_all();
    assert_eq!(items[0].unit_price, gold.unit_price);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[1].unit_price, dust.unit_price);
    assert_eq!(items[2].unit_price, odd.unit_price);
    assert_eq!(
        cart.total_value(),
        "2987654321.1235".parse::<Decimal>().unwrap()
    );
}

#[test]
fn test_unrepresentable_prices_are_rejected_up_front() {
    assert!(UnitPrice::parse("50000000000000000000000000000").is_err());
    assert!(UnitPrice::parse("0.12345678901234567890123").is_err());
}

// ============================================================================
// Stored format
// ============================================================================

#[test]
fn test_stored_format_is_plain_json() {
    let shop = TestShop::new().unwrap();
    shop.cart().unwrap().add(product("mug", "ASCII Mug", "39.90")).unwrap();

    let stored: Value = serde_json::from_str(&fs::read_to_string(shop.cart_file()).unwrap()).unwrap();
    let entry = &stored[0];
    assert_eq!(entry["id"], "mug");
    assert_eq!(entry["name"], "ASCII Mug");
    assert_eq!(entry["price"].as_f64(), Some(39.9));
    assert_eq!(entry["image"], "mug.png");
    assert_eq!(entry["quantity"], 1);
}

#[test]
fn test_hand_written_slot_is_decoded_leniently() {
    let shop = TestShop::new().unwrap();
    fs::write(
        shop.cart_file(),
        r#"[
            {"id": "a", "name": "Widget", "price": 10, "image": "a.png", "quantity": 2},
            {"name": "no id", "price": 1},
            {"id": "b", "name": "Gadget", "price": 5},
            {"id": "a", "name": "Widget", "price": 10, "image": "a.png", "quantity": 1}
        ]"#,
    )
    .unwrap();

    let cart = shop.cart().unwrap();
    let items = cart.get_all();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[1].id, "b");
    assert_eq!(items[1].quantity, 1);
    assert_eq!(cart.total_value(), Decimal::new(35, 0));
}

#[test]
fn test_no_temporary_files_left_behind() {
    let shop = TestShop::new().unwrap();
    let cart = shop.cart().unwrap();
    for i in 0..5 {
        cart.add(product(&format!("p{i}"), "P", "1")).unwrap();
    }

    let names: Vec<String> = fs::read_dir(shop.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["ascii_cart.json"]);
}
