//! Durable store adapter for the cart.
//!
//! [`CartStore`] reads and writes the whole cart as one JSON array held in a
//! single named storage slot. Reading never fails: an absent slot is the
//! normal initial state, and corrupt data is treated as an empty cart.
//!
//! # Persisted layout
//!
//! ```json
//! [{"id": "a", "name": "Widget", "price": 10.0, "image": "w.png", "quantity": 2}]
//! ```
//!
//! There is no version field, so decoding is tolerant:
//! - unknown fields are ignored
//! - a missing `quantity` defaults to 1, missing `name`/`image` to `""`
//! - entries without a usable `id` or `price`, or with `quantity: 0`, are dropped
//! - a repeated `id` is merged into its first occurrence

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::storage::{KeyValueStorage, StorageError};
use crate::types::{CartItem, ProductId, UnitPrice};

/// Default storage slot for the cart.
pub const DEFAULT_CART_KEY: &str = "ascii_cart";

/// Errors that can occur while writing the cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes the cart slot of a [`KeyValueStorage`].
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Create an adapter over `storage` using the slot `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] if `key` is not a valid slot name.
    pub fn new(storage: S, key: impl Into<String>) -> Result<Self, StorageError> {
        let key = key.into();
        crate::storage::validate_key(&key)?;
        Ok(Self { storage, key })
    }

    /// Create an adapter over `storage` using [`DEFAULT_CART_KEY`].
    pub fn with_default_key(storage: S) -> Self {
        Self {
            storage,
            key: DEFAULT_CART_KEY.to_owned(),
        }
    }

    /// The slot this adapter reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted cart.
    ///
    /// Returns an empty cart if the slot is absent, unreadable, or corrupt.
    pub fn load(&self) -> Vec<CartItem> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Cart slot unreadable, starting empty");
                return Vec::new();
            }
        };
        decode(&self.key, &raw)
    }

    /// Replace the persisted cart with `items`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if serialization or the storage write fails.
    /// On error the previously persisted cart is left in place.
    pub fn store(&self, items: &[CartItem]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }
}

/// Loose shape of a persisted entry; every field is optional so one bad
/// field does not take the rest of the cart down with it.
#[derive(Deserialize)]
struct StoredEntry {
    id: Option<String>,
    name: Option<String>,
    price: Option<UnitPrice>,
    image: Option<String>,
    quantity: Option<u32>,
}

impl StoredEntry {
    fn into_item(self) -> Option<CartItem> {
        let id = ProductId::parse(self.id.as_deref()?).ok()?;
        let quantity = self.quantity.unwrap_or(1);
        if quantity == 0 {
            return None;
        }
        Some(CartItem {
            id,
            name: self.name.unwrap_or_default(),
            unit_price: self.price?,
            image: self.image.unwrap_or_default(),
            quantity,
        })
    }
}

fn decode(key: &str, raw: &str) -> Vec<CartItem> {
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            tracing::warn!(key, kind = json_kind(&other), "Cart slot is not an array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Cart slot is corrupt, starting empty");
            return Vec::new();
        }
    };

    let mut items: Vec<CartItem> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let Some(item) = serde_json::from_value::<StoredEntry>(entry)
            .ok()
            .and_then(StoredEntry::into_item)
        else {
            tracing::warn!(key, index, "Dropping unreadable cart entry");
            continue;
        };

        if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            items.push(item);
        }
    }
    items
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
