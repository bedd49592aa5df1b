//! Shopping cart state for TurboCommerce storefronts.
//!
//! This crate keeps a session's cart in memory, checks every quantity
//! increase against a remote stock service and mirrors the cart to a
//! persisted snapshot after each successful change:
//!
//! - **Catalog**: products, cart lines, stock records
//! - **Cart**: the cart value type and the stock-checked [`CartStore`]
//! - **Service**: the [`StockService`] and [`Catalog`] seams, plus an
//!   in-memory implementation
//! - **Notify**: localized notices for rejected operations
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use turbo_cache::{Cache, MemoryStore};
//! use turbo_cart::prelude::*;
//!
//! let storefront = Arc::new(InMemoryStorefront::load("server.json")?);
//! let store = CartStore::initialize(
//!     &StoreConfig::default(),
//!     Cache::new(Arc::new(MemoryStore::new())),
//!     storefront.clone(),
//!     storefront,
//! );
//!
//! store.add_product(ProductId::new(1)).await?;
//! println!("{} items", store.cart().await.item_count());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod memory;
pub mod notify;
pub mod service;

pub mod cart;
pub mod catalog;

pub use cart::{Cart, CartStore, UpdateProductAmount};
pub use catalog::{Product, ProductDetails, Stock};
pub use config::StoreConfig;
pub use error::{CartError, CartErrorKind, CartOperation, ServiceError};
pub use ids::ProductId;
pub use memory::InMemoryStorefront;
pub use notify::{Locale, Notice, NoticeQueue, Notifier, TracingNotifier};
pub use service::{Catalog, StockService};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartStore, UpdateProductAmount};
    pub use crate::catalog::{Product, ProductDetails, Stock};
    pub use crate::config::StoreConfig;
    pub use crate::error::{CartError, CartErrorKind, CartOperation, ServiceError};
    pub use crate::ids::ProductId;
    pub use crate::memory::InMemoryStorefront;
    pub use crate::notify::{Locale, Notice, NoticeQueue, Notifier, TracingNotifier};
    pub use crate::service::{Catalog, StockService};
}
