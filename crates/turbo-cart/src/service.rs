//! Remote collaborators of the cart.

use async_trait::async_trait;

use crate::catalog::{ProductDetails, Stock};
use crate::error::ServiceError;
use crate::ids::ProductId;

/// Source of truth for available quantities.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Current stock of `product_id`.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
}

/// Source of product metadata.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Metadata of `product_id`.
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError>;
}
