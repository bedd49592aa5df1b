//! Stock records.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Available quantity for a product, as reported by the stock service.
///
/// The stock endpoint answers `{ "id": 1, "amount": 3 }`; `id` may be
/// omitted and is then filled in by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Product this record belongs to.
    #[serde(default, alias = "productId", skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Units available.
    pub amount: i64,
}

impl Stock {
    /// Create a stock record.
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self {
            id: Some(id),
            amount,
        }
    }

    /// Check if nothing is available.
    pub fn is_out_of_stock(&self) -> bool {
        self.amount <= 0
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_availability() {
        let stock = Stock::new(ProductId::new(1), 3);
        assert!(!stock.is_out_of_stock());
        assert!(stock.can_fulfill(3));
        assert!(!stock.can_fulfill(4));

        assert!(Stock::new(ProductId::new(2), 0).is_out_of_stock());
    }

    #[test]
    fn test_stock_wire_shapes() {
        let with_id: Stock = serde_json::from_str(r#"{"id":1,"amount":3}"#).unwrap();
        assert_eq!(with_id, Stock::new(ProductId::new(1), 3));

        let aliased: Stock = serde_json::from_str(r#"{"productId":1,"amount":3}"#).unwrap();
        assert_eq!(aliased.id, Some(ProductId::new(1)));

        let bare: Stock = serde_json::from_str(r#"{"amount":0}"#).unwrap();
        assert_eq!(bare.id, None);
        assert!(bare.is_out_of_stock());
    }
}
