//! Unified error handling for page controllers.
//!
//! Nothing in the storefront surfaces an error to the user. Event handlers
//! return `Result<T, AppError>` internally and hand failures to [`report`],
//! which logs them and lets the page carry on.

use ascii_cart_core::{CartError, StorageError};
use thiserror::Error;

use crate::controllers::listing::ProductMarkupError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A cart mutation could not be persisted.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The storage backend could not be set up.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// An add-to-cart affordance carried unusable data attributes.
    #[error("Invalid product markup: {0}")]
    ProductMarkup(#[from] ProductMarkupError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Log a handler failure.
///
/// Bad markup is a content problem and logs at `warn`; everything else is
/// an `error`.
pub fn report(context: &str, err: &AppError) {
    match err {
        AppError::ProductMarkup(_) => {
            tracing::warn!(error = %err, context, "Ignoring UI event");
        }
        _ => {
            tracing::error!(error = %err, context, "UI handler failed");
        }
    }
}
