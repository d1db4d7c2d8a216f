//! Cart inspection and editing commands.

use std::io::Write;

use ascii_cart_core::{CartItem, CartManager, KeyValueStorage, ProductId, UnitPrice};
use ascii_cart_storefront::StorefrontConfig;
use ascii_cart_storefront::views::format_money;

use super::CommandError;

/// Print every cart line in display order.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn list<S: KeyValueStorage>(
    cart: &CartManager<S>,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let items = cart.get_all();
    if items.is_empty() {
        writeln!(out, "Cart is empty.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<16} {:<24} {:>5} {:>12} {:>12}",
        "ID", "NAME", "QTY", "UNIT", "TOTAL"
    )?;
    writeln!(out, "{}", "-".repeat(73))?;
    for item in &items {
        writeln!(
            out,
            "{:<16} {:<24} {:>5} {:>12} {:>12}",
            item.id.as_str(),
            item.name,
            item.quantity,
            format_money(&config.currency_symbol, item.unit_price.amount()),
            format_money(&config.currency_symbol, item.line_total()),
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Total: {} line(s)", items.len())?;
    Ok(())
}

/// Add one unit of a product.
///
/// # Errors
///
/// Returns an error if the id or price is invalid, or the cart cannot be
/// saved.
pub fn add<S: KeyValueStorage>(
    cart: &CartManager<S>,
    id: &str,
    name: &str,
    price: &str,
    image: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let id = ProductId::parse(id).map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
    let price = UnitPrice::parse(price).map_err(|e| CommandError::InvalidArgument(e.to_string()))?;

    cart.add(CartItem::new(id.clone(), name, price, image))?;

    let quantity = cart
        .get_all()
        .iter()
        .find(|item| item.id == id)
        .map_or(0, |item| item.quantity);
    tracing::info!(%id, quantity, "Added to cart");
    writeln!(out, "{name} added to cart (x{quantity}).")?;
    Ok(())
}

/// Remove a product line. Removing an absent id is not an error.
///
/// # Errors
///
/// Returns an error if the id is blank or the cart cannot be saved.
pub fn remove<S: KeyValueStorage>(
    cart: &CartManager<S>,
    id: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let id = ProductId::parse(id).map_err(|e| CommandError::InvalidArgument(e.to_string()))?;

    let present = cart.get_all().iter().any(|item| item.id == id);
    cart.remove(&id)?;

    if present {
        tracing::info!(%id, "Removed from cart");
        writeln!(out, "Removed {id}.")?;
    } else {
        writeln!(out, "{id} is not in the cart.")?;
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn clear<S: KeyValueStorage>(
    cart: &CartManager<S>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    cart.clear()?;
    tracing::info!("Cleared cart");
    writeln!(out, "Cart cleared.")?;
    Ok(())
}

/// Print the item count and grand total.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn total<S: KeyValueStorage>(
    cart: &CartManager<S>,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let summary = cart.summary();
    writeln!(out, "Items: {}", summary.item_count)?;
    writeln!(
        out,
        "Total: {}",
        format_money(&config.currency_symbol, summary.total_value)
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ascii_cart_core::{CartStore, MemoryStorage};

    use super::*;

    fn cart() -> CartManager<MemoryStorage> {
        CartManager::new(CartStore::with_default_key(MemoryStorage::new()))
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CommandError>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_and_total() {
        let cart = cart();
        let config = StorefrontConfig::default();

        let msg = output(|out| add(&cart, "mug", "ASCII Mug", "39.90", "mug.png", out));
        assert_eq!(msg, "ASCII Mug added to cart (x1).\n");
        let msg = output(|out| add(&cart, "mug", "ASCII Mug", "39.90", "mug.png", out));
        assert_eq!(msg, "ASCII Mug added to cart (x2).\n");

        let text = output(|out| total(&cart, &config, out));
        assert_eq!(text, "Items: 2\nTotal: R$ 79.80\n");
    }

    #[test]
    fn test_add_rejects_bad_arguments() {
        let cart = cart();
        let mut out = Vec::new();
        assert!(matches!(
            add(&cart, "mug", "Mug", "dez", "", &mut out),
            Err(CommandError::InvalidArgument(_))
        ));
        assert!(matches!(
            add(&cart, "  ", "Mug", "1", "", &mut out),
            Err(CommandError::InvalidArgument(_))
        ));
        assert!(cart.get_all().is_empty());
    }

    #[test]
    fn test_list() {
        let cart = cart();
        let config = StorefrontConfig::default();
        assert_eq!(output(|out| list(&cart, &config, out)), "Cart is empty.\n");

        output(|out| add(&cart, "mug", "ASCII Mug", "39.90", "", out));
        output(|out| add(&cart, "tee", "ASCII Tee", "59", "", out));

        let text = output(|out| list(&cart, &config, out));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("mug"));
        assert!(lines[2].ends_with("R$ 39.90"));
        assert!(lines[3].starts_with("tee"));
        assert!(lines[3].contains("R$ 59.00"));
        assert!(text.ends_with("Total: 2 line(s)\n"));
    }

    #[test]
    fn test_remove_and_clear() {
        let cart = cart();
        output(|out| add(&cart, "mug", "Mug", "1", "", out));
        output(|out| add(&cart, "tee", "Tee", "2", "", out));

        assert_eq!(output(|out| remove(&cart, "mug", out)), "Removed mug.\n");
        assert_eq!(output(|out| remove(&cart, "mug", out)), "mug is not in the cart.\n");
        assert_eq!(cart.total_item_count(), 1);

        assert_eq!(output(|out| clear(&cart, out)), "Cart cleared.\n");
        assert!(cart.get_all().is_empty());
    }
}
