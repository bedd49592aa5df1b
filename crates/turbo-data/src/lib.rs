//! HTTP client utilities for TurboCart.
//!
//! Provides a small JSON fetch client and the storefront API bindings the
//! cart uses for stock and product lookups.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::{ApiConfig, StorefrontApi};
//! use turbo_cart::{ProductId, StockService};
//!
//! let api = StorefrontApi::from_config(&ApiConfig::default());
//! let stock = api.stock(ProductId::new(1)).await?;
//! println!("{} in stock", stock.amount);
//! ```

mod api;
mod client;
mod dependency;
mod error;

pub use api::{ApiConfig, StorefrontApi};
pub use client::FetchClient;
pub use dependency::DependencyTag;
pub use error::FetchError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiConfig, DependencyTag, FetchClient, FetchError, StorefrontApi};
}
