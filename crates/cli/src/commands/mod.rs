//! CLI commands.

pub mod cart;
pub mod render;

use std::io;

use ascii_cart_core::{CartError, CartManager, CartStore, FileStorage, StorageError};
use ascii_cart_storefront::{AppError, StorefrontConfig};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The storage directory or key is unusable.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be saved.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The storefront could not be mounted or rendered.
    #[error("Storefront error: {0}")]
    Storefront(#[from] AppError),

    /// A command-line argument is invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Open the configured file-backed cart.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be created or the
/// configured key is invalid.
pub fn open_cart(config: &StorefrontConfig) -> Result<CartManager<FileStorage>, CommandError> {
    let storage = FileStorage::open(&config.storage_dir)?;
    tracing::debug!(dir = %storage.dir().display(), key = %config.cart_key, "Opened cart storage");
    Ok(CartManager::new(CartStore::new(storage, config.cart_key.as_str())?))
}
