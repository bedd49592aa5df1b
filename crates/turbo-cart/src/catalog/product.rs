//! Product and cart line types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Product metadata as served by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetails {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    pub image: String,
}

impl ProductDetails {
    /// Turn catalog metadata into a cart line carrying `amount` units.
    pub fn into_line(self, amount: i64) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            amount,
        }
    }
}

/// A product held in the cart, i.e. a line item.
///
/// `amount` is at least 1 for as long as the line exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog identifier, unique within a cart.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    pub image: String,
    /// Units in the cart.
    pub amount: i64,
}

impl Product {
    /// Price times amount.
    pub fn subtotal(&self) -> f64 {
        self.price * self.amount as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_line() {
        let details = ProductDetails {
            id: ProductId::new(1),
            title: "Tênis de Caminhada Leve Confortável".to_string(),
            price: 179.9,
            image: "https://example.com/1.jpg".to_string(),
        };

        let line = details.into_line(2);
        assert_eq!(line.id, ProductId::new(1));
        assert_eq!(line.amount, 2);
        assert!((line.subtotal() - 359.8).abs() < 1e-9);
    }

    #[test]
    fn test_line_wire_shape() {
        let json = r#"{"id":3,"title":"Shoe","price":99.5,"image":"shoe.jpg","amount":4}"#;
        let line: Product = serde_json::from_str(json).unwrap();
        assert_eq!(line.amount, 4);
        assert_eq!(serde_json::to_string(&line).unwrap(), json);
    }
}
