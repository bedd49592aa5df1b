//! Cart error types.

use std::fmt;

use thiserror::Error;
use turbo_cache::CacheError;

use crate::ids::ProductId;
use crate::notify::Locale;

/// The three mutating cart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

impl CartOperation {
    /// Generic user-facing message for a failed operation.
    pub fn failure_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Add, Locale::PtBr) => "Erro na adição do produto",
            (Self::Add, Locale::En) => "Error adding product",
            (Self::Remove, Locale::PtBr) => "Erro na remoção do produto",
            (Self::Remove, Locale::En) => "Error removing product",
            (Self::Update, Locale::PtBr) => "Erro na alteração de quantidade do produto",
            (Self::Update, Locale::En) => "Error updating product quantity",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add product",
            Self::Remove => "remove product",
            Self::Update => "update product amount",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the stock service or catalog.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service has no record for the product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Request could not be completed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Decode(e.to_string())
    }
}

/// Coarse classification of a [`CartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartErrorKind {
    /// Requested quantity exceeds stock.
    OutOfStock,
    /// Removal of a product that has no line.
    NotInCart,
    /// Lookup or storage failure.
    Unavailable,
}

/// Errors returned by cart operations.
///
/// None of these leave a partial mutation behind: the cart and its
/// snapshot are exactly as they were before the failed call.
#[derive(Error, Debug)]
pub enum CartError {
    /// Requested quantity exceeds available stock.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Product has no line in the cart.
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),

    /// Stock or catalog lookup failed.
    #[error("Failed to {operation}: {source}")]
    Lookup {
        operation: CartOperation,
        source: ServiceError,
    },

    /// Snapshot could not be written.
    #[error("Failed to {operation}: could not persist cart: {source}")]
    Persist {
        operation: CartOperation,
        source: CacheError,
    },
}

impl CartError {
    pub fn kind(&self) -> CartErrorKind {
        match self {
            Self::OutOfStock { .. } => CartErrorKind::OutOfStock,
            Self::NotInCart(_) => CartErrorKind::NotInCart,
            Self::Lookup { .. } | Self::Persist { .. } => CartErrorKind::Unavailable,
        }
    }

    /// User-facing notice text.
    pub fn message(&self, locale: Locale) -> &'static str {
        match self {
            Self::OutOfStock { .. } => match locale {
                Locale::PtBr => "Quantidade solicitada fora de estoque",
                Locale::En => "Requested quantity out of stock",
            },
            Self::NotInCart(_) => CartOperation::Remove.failure_message(locale),
            Self::Lookup { operation, .. } | Self::Persist { operation, .. } => {
                operation.failure_message(locale)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let oos = CartError::OutOfStock {
            product_id: ProductId::new(1),
            requested: 2,
            available: 1,
        };
        assert_eq!(oos.kind(), CartErrorKind::OutOfStock);
        assert_eq!(oos.message(Locale::PtBr), "Quantidade solicitada fora de estoque");
        assert_eq!(oos.message(Locale::En), "Requested quantity out of stock");

        let missing = CartError::NotInCart(ProductId::new(9));
        assert_eq!(missing.message(Locale::PtBr), "Erro na remoção do produto");

        let lookup = CartError::Lookup {
            operation: CartOperation::Update,
            source: ServiceError::Transport("connection refused".into()),
        };
        assert_eq!(lookup.kind(), CartErrorKind::Unavailable);
        assert_eq!(lookup.message(Locale::En), "Error updating product quantity");
        assert_eq!(
            lookup.to_string(),
            "Failed to update product amount: Transport error: connection refused"
        );
    }
}
