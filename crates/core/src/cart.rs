//! Cart state manager.
//!
//! [`CartManager`] never caches cart contents. Every operation reads the
//! current persisted state through a [`CartStore`], applies its change to a
//! [`Cart`], and writes the result back before returning, so the store is
//! the single source of truth for every page.
//!
//! Mutations notify registered [`CartObserver`]s synchronously, after the
//! write has succeeded.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

use crate::storage::KeyValueStorage;
use crate::store::{CartStore, StoreError};
use crate::types::{CartItem, ProductId};

/// Errors returned by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persisting the updated cart failed; the previous cart is still stored.
    #[error("failed to persist cart: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for cart mutations.
pub type Result<T> = std::result::Result<T, CartError>;

// =============================================================================
// Cart
// =============================================================================

/// An ordered collection of line items, unique by product id.
///
/// Insertion order is display order. Quantities are always at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `item`.
    ///
    /// If the product is already in the cart its quantity goes up by one and
    /// the incoming name, price, and image are discarded. Otherwise the item
    /// is appended with a quantity of 1, whatever quantity it carried.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(item.with_quantity(1));
        }
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() != before
    }

    /// Look up the line for `id`.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Line items in display order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart, returning its line items.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of line totals, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Counts and totals for the current contents.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            total_value: self.total_value(),
        }
    }
}

impl From<Vec<CartItem>> for Cart {
    /// Wrap already-normalized items, as produced by [`CartStore::load`].
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

/// Aggregate figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Total number of units.
    pub item_count: u64,
    /// Sum of `unit_price * quantity`.
    pub total_value: Decimal,
}

// =============================================================================
// Observers
// =============================================================================

/// Receives a callback after every successful cart mutation.
pub trait CartObserver {
    /// Called with the cart as it was just persisted.
    fn cart_changed(&self, cart: &Cart);
}

impl<F: Fn(&Cart)> CartObserver for F {
    fn cart_changed(&self, cart: &Cart) {
        self(cart);
    }
}

// =============================================================================
// Cart Manager
// =============================================================================

/// Load-mutate-store operations over a persisted cart.
pub struct CartManager<S> {
    store: CartStore<S>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S> std::fmt::Debug for CartManager<S>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("store", &self.store)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S: KeyValueStorage> CartManager<S> {
    /// Create a manager over `store`.
    pub fn new(store: CartStore<S>) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers run in registration order.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The underlying store adapter.
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Current cart contents.
    ///
    /// The returned items are a copy; changing them does not touch the
    /// persisted cart.
    pub fn get_all(&self) -> Vec<CartItem> {
        self.store.load()
    }

    /// Add one unit of `item`; see [`Cart::add`] for the merge rules.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the updated cart cannot be persisted.
    #[instrument(skip_all, fields(id = %item.id))]
    pub fn add(&self, item: CartItem) -> Result<()> {
        self.update(|cart| cart.add(item))
    }

    /// Remove the line for `id`. Removing an absent id is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the updated cart cannot be persisted.
    #[instrument(skip_all, fields(id = %id))]
    pub fn remove(&self, id: &ProductId) -> Result<()> {
        self.update(|cart| {
            if !cart.remove(id) {
                tracing::debug!("No cart line to remove");
            }
        })
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the empty cart cannot be persisted.
    #[instrument(skip_all)]
    pub fn clear(&self) -> Result<()> {
        self.update(|cart| *cart = Cart::new())
    }

    /// Total number of units in the cart; 0 when empty.
    pub fn total_item_count(&self) -> u64 {
        self.load().item_count()
    }

    /// Sum of `unit_price * quantity`; 0 when empty.
    pub fn total_value(&self) -> Decimal {
        self.load().total_value()
    }

    /// Counts and totals from a single read.
    pub fn summary(&self) -> CartSummary {
        self.load().summary()
    }

    fn load(&self) -> Cart {
        Cart::from(self.store.load())
    }

    fn update(&self, mutate: impl FnOnce(&mut Cart)) -> Result<()> {
        let mut cart = self.load();
        mutate(&mut cart);
        self.store.store(cart.items())?;

        let summary = cart.summary();
        tracing::debug!(
            lines = cart.items().len(),
            item_count = summary.item_count,
            total_value = %summary.total_value,
            "Cart updated"
        );

        for observer in &self.observers {
            observer.cart_changed(&cart);
        }
        Ok(())
    }
}
