//! Storefront REST API bindings.
//!
//! Implements the cart's [`StockService`] and [`Catalog`] against a
//! json-server style backend exposing `GET /stock/{id}` and
//! `GET /products/{id}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use turbo_cart::{Catalog, ProductDetails, ProductId, ServiceError, Stock, StockService};

use crate::{DependencyTag, FetchClient, FetchError};

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

/// Connection settings for the storefront API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds, overriding per-dependency defaults.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

/// Remote stock service and catalog.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: FetchClient,
}

impl StorefrontApi {
    /// Use a configured fetch client. Its base URL must point at the API root.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Build a client from configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        let mut client = FetchClient::new()
            .with_base_url(config.base_url.clone())
            .with_default_header("Accept", "application/json");

        if let Some(ms) = config.timeout_ms {
            let timeout = Duration::from_millis(ms);
            client = client
                .with_timeout(DependencyTag::Inventory, timeout)
                .with_timeout(DependencyTag::Catalog, timeout);
        }

        Self::new(client)
    }
}

/// Map a transport-level failure onto the cart's service error.
fn service_error(product_id: ProductId, e: FetchError) -> ServiceError {
    match e {
        FetchError::HttpError { status: 404, .. } => ServiceError::NotFound(product_id),
        FetchError::ParseError(msg) => ServiceError::Decode(msg),
        other => ServiceError::Transport(other.to_string()),
    }
}

#[async_trait]
impl StockService for StorefrontApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        let mut stock: Stock = self
            .client
            .get_json(&format!("/stock/{}", product_id), DependencyTag::Inventory)
            .await
            .map_err(|e| service_error(product_id, e))?;
        stock.id.get_or_insert(product_id);
        Ok(stock)
    }
}

#[async_trait]
impl Catalog for StorefrontApi {
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError> {
        self.client
            .get_json(&format!("/products/{}", product_id), DependencyTag::Catalog)
            .await
            .map_err(|e| service_error(product_id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    type Route = (&'static str, u16, &'static str);

    /// Minimal HTTP/1.1 responder. Unknown paths answer 404.
    async fn serve(routes: Vec<Route>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();
                    let path = request.split_whitespace().nth(1).unwrap_or("/");

                    let (status, body) = routes
                        .iter()
                        .find(|(p, _, _)| *p == path)
                        .map(|(_, s, b)| (*s, *b))
                        .unwrap_or((404, "{}"));

                    let response = format!(
                        "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    fn api(base_url: String) -> StorefrontApi {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        StorefrontApi::new(FetchClient::with_client(client).with_base_url(base_url))
    }

    #[tokio::test]
    async fn test_stock_lookup() {
        let base = serve(vec![("/stock/1", 200, r#"{"id":1,"amount":3}"#)]).await;
        let stock = api(base).stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock, Stock::new(ProductId::new(1), 3));
    }

    #[tokio::test]
    async fn test_stock_without_id_is_filled_in() {
        let base = serve(vec![("/stock/4", 200, r#"{"amount":0}"#)]).await;
        let stock = api(base).stock(ProductId::new(4)).await.unwrap();
        assert_eq!(stock.id, Some(ProductId::new(4)));
        assert!(stock.is_out_of_stock());
    }

    #[tokio::test]
    async fn test_product_lookup() {
        let base = serve(vec![(
            "/products/2",
            200,
            r#"{"id":2,"title":"Tênis VR Caminhada","price":139.9,"image":"2.jpg"}"#,
        )])
        .await;
        let product = api(base).product(ProductId::new(2)).await.unwrap();
        assert_eq!(product.title, "Tênis VR Caminhada");
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let base = serve(vec![]).await;
        let err = api(base).product(ProductId::new(9)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(id) if id == ProductId::new(9)));
    }

    #[tokio::test]
    async fn test_server_error_is_transport() {
        let base = serve(vec![("/stock/1", 500, r#"{"error":"boom"}"#)]).await;
        let err = api(base).stock(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let base = serve(vec![("/stock/1", 200, r#"{"amount":"many"}"#)]).await;
        let err = api(base).stock(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_hung_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let api = StorefrontApi::new(
            FetchClient::with_client(client)
                .with_base_url(format!("http://{}", addr))
                .with_timeout(DependencyTag::Inventory, Duration::from_millis(100)),
        );

        let err = api.stock(ProductId::new(1)).await.unwrap_err();
        match err {
            ServiceError::Transport(msg) => assert!(msg.contains("timed out"), "{}", msg),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.base_url, "http://localhost:3333");
    }
}
