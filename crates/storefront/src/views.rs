//! Cart display data and templates.
//!
//! Amounts are formatted once here so templates only print strings.

use askama::Template;
use ascii_cart_core::CartItem;
use rust_decimal::Decimal;

/// Shown after a product is added from the listing page.
#[must_use]
pub fn item_added_message(name: &str) -> String {
    format!("{name} foi adicionado ao carrinho!")
}

/// Shown after the contact form is submitted.
pub const CONTACT_THANKS_MESSAGE: &str = "Obrigado pela sua mensagem!";

/// Format an amount as `"<symbol> 12.34"`.
#[must_use]
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{symbol} {:.2}", amount.round_dp(2))
}

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
}

impl CartView {
    /// Build display data for `items`, prefixing amounts with `symbol`.
    #[must_use]
    pub fn new(items: &[CartItem], symbol: &str) -> Self {
        let total = items
            .iter()
            .map(CartItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self {
            items: items
                .iter()
                .map(|item| CartItemView {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    image: item.image.clone(),
                    quantity: item.quantity,
                    line_total: format_money(symbol, item.line_total()),
                })
                .collect(),
            total: format_money(symbol, total),
        }
    }

    /// Text for the grand-total element.
    #[must_use]
    pub fn total_label(&self) -> String {
        format!("Total: {}", self.total)
    }
}

/// Cart line items fragment, rendered into the items container.
#[derive(Template)]
#[template(path = "cart/items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
}
