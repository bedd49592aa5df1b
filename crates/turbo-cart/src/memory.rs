//! In-memory storefront backend.
//!
//! Serves stock and product metadata from maps, optionally seeded from a
//! json-server style fixture:
//!
//! ```json
//! {
//!   "stock": [{ "id": 1, "amount": 3 }],
//!   "products": [{ "id": 1, "title": "Tênis", "price": 179.9, "image": "1.jpg" }]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::{ProductDetails, Stock};
use crate::error::ServiceError;
use crate::ids::ProductId;
use crate::service::{Catalog, StockService};

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    stock: Vec<Stock>,
    #[serde(default)]
    products: Vec<ProductDetails>,
}

/// A [`StockService`] and [`Catalog`] held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryStorefront {
    stock: RwLock<HashMap<ProductId, i64>>,
    products: RwLock<HashMap<ProductId, ProductDetails>>,
}

impl InMemoryStorefront {
    /// Create an empty storefront.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fixture document.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let fixture: Fixture = serde_json::from_str(json)?;
        let mut storefront = Self::new();

        for record in fixture.stock {
            let id = record
                .id
                .ok_or_else(|| ServiceError::Decode("stock record without id".to_string()))?;
            storefront.stock.get_mut().insert(id, record.amount);
        }
        for product in fixture.products {
            storefront.products.get_mut().insert(product.id, product);
        }

        debug!(
            stock = storefront.stock.get_mut().len(),
            products = storefront.products.get_mut().len(),
            "loaded storefront fixture"
        );
        Ok(storefront)
    }

    /// Read and parse a fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Transport(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Register a product with its stock.
    pub fn with_product(mut self, product: ProductDetails, stock: i64) -> Self {
        self.stock.get_mut().insert(product.id, stock);
        self.products.get_mut().insert(product.id, product);
        self
    }

    /// Overwrite the stock of a product.
    pub async fn set_stock(&self, product_id: ProductId, amount: i64) {
        self.stock.write().await.insert(product_id, amount);
    }
}

#[async_trait]
impl StockService for InMemoryStorefront {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        self.stock
            .read()
            .await
            .get(&product_id)
            .map(|amount| Stock::new(product_id, *amount))
            .ok_or(ServiceError::NotFound(product_id))
    }
}

#[async_trait]
impl Catalog for InMemoryStorefront {
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError> {
        self.products
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(ServiceError::NotFound(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "stock": [{ "id": 1, "amount": 3 }, { "id": 2, "amount": 0 }],
        "products": [
            { "id": 1, "title": "Tênis de Caminhada", "price": 179.9, "image": "1.jpg" },
            { "id": 2, "title": "Tênis VR Caminhada", "price": 139.9, "image": "2.jpg" }
        ]
    }"#;

    #[tokio::test]
    async fn test_fixture_lookups() {
        let storefront = InMemoryStorefront::from_json(FIXTURE).unwrap();

        let stock = storefront.stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock.amount, 3);

        let product = storefront.product(ProductId::new(2)).await.unwrap();
        assert_eq!(product.title, "Tênis VR Caminhada");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let storefront = InMemoryStorefront::from_json(FIXTURE).unwrap();
        assert!(matches!(
            storefront.stock(ProductId::new(99)).await,
            Err(ServiceError::NotFound(id)) if id == ProductId::new(99)
        ));
    }

    #[tokio::test]
    async fn test_set_stock() {
        let storefront = InMemoryStorefront::from_json(FIXTURE).unwrap();
        storefront.set_stock(ProductId::new(2), 5).await;
        assert_eq!(storefront.stock(ProductId::new(2)).await.unwrap().amount, 5);
    }

    #[test]
    fn test_fixture_stock_requires_id() {
        let result = InMemoryStorefront::from_json(r#"{"stock":[{"amount":1}]}"#);
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }
}
