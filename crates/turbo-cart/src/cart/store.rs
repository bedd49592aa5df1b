//! Stock-checked cart store.
//!
//! [`CartStore`] owns the session's [`Cart`], mirrors it to a persisted
//! [`Snapshot`] and checks every quantity increase against the stock
//! service. Each mutation holds the store's lock from its first read to its
//! commit, so overlapping calls run one after another instead of working
//! from a stale copy of the cart.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use turbo_cache::{Cache, Snapshot};

use crate::cart::Cart;
use crate::catalog::{Product, Stock};
use crate::config::StoreConfig;
use crate::error::{CartError, CartOperation};
use crate::ids::ProductId;
use crate::notify::{Locale, Notice, Notifier};
use crate::service::{Catalog, StockService};

/// Request to set a line to an exact amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// Session cart backed by a stock service, a catalog and a snapshot slot.
///
/// # Example
///
/// ```rust,ignore
/// let storefront = Arc::new(InMemoryStorefront::load("server.json")?);
/// let cache = Cache::new(Arc::new(FileStore::open("storage.json")?));
///
/// let store = CartStore::initialize(
///     &StoreConfig::default(),
///     cache,
///     storefront.clone(),
///     storefront,
/// )
/// .with_notifier(Arc::new(TracingNotifier));
///
/// store.add_product(ProductId::new(1)).await?;
/// store.update_product_amount(UpdateProductAmount::new(ProductId::new(1), 3)).await?;
/// let cart = store.cart().await;
/// ```
pub struct CartStore {
    cart: Mutex<Cart>,
    snapshot: Snapshot<Cart>,
    stock: Arc<dyn StockService>,
    catalog: Arc<dyn Catalog>,
    notifier: Option<Arc<dyn Notifier>>,
    locale: Locale,
}

impl CartStore {
    /// Restore the cart from its snapshot.
    ///
    /// A missing snapshot starts an empty cart. So does an unreadable one,
    /// after logging why. Restored lines are not checked against stock.
    pub fn initialize(
        config: &StoreConfig,
        cache: Cache,
        stock: Arc<dyn StockService>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        let snapshot = Snapshot::new(cache, config.storage_key.clone());

        let cart = match snapshot.load() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %config.storage_key, error = %e, "discarding unreadable cart snapshot");
                Cart::new()
            }
        };

        debug!(key = %config.storage_key, lines = cart.len(), "cart initialized");

        Self {
            cart: Mutex::new(cart),
            snapshot,
            stock,
            catalog,
            notifier: None,
            locale: config.locale,
        }
    }

    /// Report rejected operations to `notifier`.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Locale notices are rendered in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Copy of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Add one unit of `product_id`.
    ///
    /// Increments an existing line or appends a new one with amount 1 using
    /// catalog metadata. Fails with [`CartError::OutOfStock`] when stock is
    /// zero or already fully held in the cart.
    pub async fn add_product(&self, product_id: ProductId) -> Result<Product, CartError> {
        let result = self.try_add(product_id).await;
        self.report(&result);
        result
    }

    /// Remove the line for `product_id`.
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Product, CartError> {
        let result = self.try_remove(product_id).await;
        self.report(&result);
        result
    }

    /// Set the amount of an existing line.
    ///
    /// A non-positive amount is ignored without error; use
    /// [`remove_product`](Self::remove_product) to drop a line. Returns the
    /// updated line, or `None` if nothing was applied.
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Option<Product>, CartError> {
        let result = self.try_update(update).await;
        self.report(&result);
        result
    }

    async fn try_add(&self, product_id: ProductId) -> Result<Product, CartError> {
        let operation = CartOperation::Add;
        let mut cart = self.cart.lock().await;

        let stock = self.lookup_stock(product_id, operation).await?;
        let held = cart.amount_of(product_id);

        // A held amount at i64::MAX cannot grow, whatever the stock.
        let Some(requested) = held
            .checked_add(1)
            .filter(|&requested| !stock.is_out_of_stock() && stock.can_fulfill(requested))
        else {
            return Err(CartError::OutOfStock {
                product_id,
                requested: held.saturating_add(1),
                available: stock.amount,
            });
        };

        let mut next = cart.clone();
        let line = match next.increment(product_id).cloned() {
            Some(line) => line,
            None => {
                let details = self
                    .catalog
                    .product(product_id)
                    .await
                    .map_err(|source| CartError::Lookup { operation, source })?;
                next.append(details.into_line(1)).clone()
            }
        };

        self.commit(&mut cart, next, operation)?;
        info!(product_id = %product_id, amount = requested, available = stock.amount, "product added to cart");
        Ok(line)
    }

    async fn try_remove(&self, product_id: ProductId) -> Result<Product, CartError> {
        let mut cart = self.cart.lock().await;

        let mut next = cart.clone();
        let removed = next
            .remove(product_id)
            .ok_or(CartError::NotInCart(product_id))?;

        self.commit(&mut cart, next, CartOperation::Remove)?;
        info!(product_id = %product_id, "product removed from cart");
        Ok(removed)
    }

    async fn try_update(&self, update: UpdateProductAmount) -> Result<Option<Product>, CartError> {
        let UpdateProductAmount { product_id, amount } = update;
        let operation = CartOperation::Update;

        if amount <= 0 {
            debug!(product_id = %product_id, amount, "ignoring non-positive amount");
            return Ok(None);
        }

        let mut cart = self.cart.lock().await;

        let stock = self.lookup_stock(product_id, operation).await?;
        if !stock.can_fulfill(amount) {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = cart.clone();
        let line = next.set_amount(product_id, amount).cloned();

        self.commit(&mut cart, next, operation)?;
        info!(product_id = %product_id, amount, available = stock.amount, "product amount updated");
        Ok(line)
    }

    async fn lookup_stock(
        &self,
        product_id: ProductId,
        operation: CartOperation,
    ) -> Result<Stock, CartError> {
        let stock = self
            .stock
            .stock(product_id)
            .await
            .map_err(|source| CartError::Lookup { operation, source })?;
        debug!(product_id = %product_id, available = stock.amount, "stock checked");
        Ok(stock)
    }

    /// Persist `next`, then make it the current cart.
    ///
    /// A failed write leaves `current` untouched.
    fn commit(
        &self,
        current: &mut Cart,
        next: Cart,
        operation: CartOperation,
    ) -> Result<(), CartError> {
        self.snapshot
            .save(&next)
            .map_err(|source| CartError::Persist { operation, source })?;
        *current = next;
        Ok(())
    }

    fn report<T>(&self, result: &Result<T, CartError>) {
        let Err(error) = result else {
            return;
        };
        warn!(kind = ?error.kind(), error = %error, "cart operation rejected");
        if let Some(notifier) = &self.notifier {
            notifier.notify(&Notice::from_error(error, self.locale));
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("snapshot", &self.snapshot)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
