//! Integration tests for the ASCII shop cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ascii-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - cart semantics over a real file-backed store,
//!   across simulated page loads
//! - `storefront_pages` - mounting pages and driving them with UI events
//!
//! Every test gets its own temporary storage directory from [`TestShop`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::rc::Rc;

use ascii_cart_core::{CartManager, CartStore, FileStorage, StorageError};
use ascii_cart_storefront::{AppError, Document, MemoryDocument, Storefront, StorefrontConfig};
use tempfile::TempDir;

/// A throwaway shop: a temporary storage directory plus the config that
/// points at it.
#[derive(Debug)]
pub struct TestShop {
    dir: TempDir,
    pub config: StorefrontConfig,
}

impl TestShop {
    /// Create a shop backed by a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = StorefrontConfig {
            storage_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        Ok(Self { dir, config })
    }

    /// Directory the cart is stored in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the stored cart file.
    #[must_use]
    pub fn cart_file(&self) -> std::path::PathBuf {
        self.dir().join(format!("{}.json", self.config.cart_key))
    }

    /// Open the file storage, as a fresh page load would.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory is unusable.
    pub fn storage(&self) -> Result<FileStorage, StorageError> {
        FileStorage::open(self.dir())
    }

    /// A cart manager over a freshly opened storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory or key is unusable.
    pub fn cart(&self) -> Result<CartManager<FileStorage>, StorageError> {
        Ok(CartManager::new(CartStore::new(
            self.storage()?,
            self.config.cart_key.as_str(),
        )?))
    }

    /// Mount `document` as a new page load.
    ///
    /// # Errors
    ///
    /// Returns an error if the storefront cannot be mounted.
    pub fn mount(&self, document: &Rc<MemoryDocument>) -> Result<Storefront, AppError> {
        let document: Rc<dyn Document> = Rc::clone(document) as Rc<dyn Document>;
        Storefront::mount(document, self.storage()?, &self.config)
    }
}

/// A page with the header indicator and a product grid.
#[must_use]
pub fn listing_page() -> Rc<MemoryDocument> {
    Rc::new(
        MemoryDocument::new()
            .with_element("cart-count")
            .with_class("product-grid"),
    )
}

/// A page with the header indicator and the full cart page.
#[must_use]
pub fn cart_page() -> Rc<MemoryDocument> {
    Rc::new(
        MemoryDocument::new()
            .with_element("cart-count")
            .with_element("cart-page")
            .with_element("cart-items-container")
            .with_element("cart-total")
            .with_element("clear-cart-button"),
    )
}

/// A page with the header indicator and the contact form.
#[must_use]
pub fn contact_page() -> Rc<MemoryDocument> {
    Rc::new(
        MemoryDocument::new()
            .with_element("cart-count")
            .with_form("contact-form", &["name", "email", "message"]),
    )
}
