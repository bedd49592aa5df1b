//! Cart value type and reconciliation primitives.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An ordered, id-unique list of cart lines.
///
/// Serialized as a bare JSON array of [`Product`], which is also the
/// persisted snapshot format. New lines are appended; updates replace a
/// line in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Get a line by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == product_id)
    }

    /// Check if a product has a line.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Units of `product_id` currently held, 0 if absent.
    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map(|p| p.amount).unwrap_or(0)
    }

    /// Add one unit to an existing line.
    ///
    /// Returns `None` if the product has no line or its amount is already
    /// `i64::MAX`; the cart is left untouched in both cases.
    pub fn increment(&mut self, product_id: ProductId) -> Option<&Product> {
        let line = self.items.iter_mut().find(|p| p.id == product_id)?;
        line.amount = line.amount.checked_add(1)?;
        Some(line)
    }

    /// Append a line for a product the cart does not hold yet.
    pub fn append(&mut self, product: Product) -> &Product {
        debug_assert!(!self.contains(product.id), "duplicate cart line {}", product.id);
        let idx = self.items.len();
        self.items.push(product);
        &self.items[idx]
    }

    /// Set the amount of an existing line.
    ///
    /// Returns `None` and leaves the cart untouched if the product has no
    /// line or `amount` is not positive.
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> Option<&Product> {
        if amount <= 0 {
            return None;
        }
        let line = self.items.iter_mut().find(|p| p.id == product_id)?;
        line.amount = amount;
        Some(line)
    }

    /// Remove a line, returning it.
    pub fn remove(&mut self, product_id: ProductId) -> Option<Product> {
        let idx = self.items.iter().position(|p| p.id == product_id)?;
        Some(self.items.remove(idx))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |count, p| count.saturating_add(p.amount))
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::subtotal).sum()
    }
}

impl From<Vec<Product>> for Cart {
    /// Build a cart from stored lines, keeping the first line per product.
    fn from(items: Vec<Product>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            if !cart.contains(item.id) {
                cart.items.push(item);
            }
        }
        cart
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u64, amount: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price: 10.0,
            image: format!("{}.jpg", id),
            amount,
        }
    }

    fn ids(cart: &Cart) -> Vec<u64> {
        cart.items().iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.amount_of(ProductId::new(1)), 0);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.append(line(3, 1));
        cart.append(line(1, 1));
        cart.append(line(2, 1));
        assert_eq!(ids(&cart), vec![3, 1, 2]);
    }

    #[test]
    fn test_increment_saturated_line_is_untouched() {
        let mut cart = Cart::from(vec![line(1, i64::MAX)]);
        assert!(cart.increment(ProductId::new(1)).is_none());
        assert_eq!(cart.amount_of(ProductId::new(1)), i64::MAX);
        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_increment_in_place() {
        let mut cart = Cart::from(vec![line(1, 1), line(5, 2), line(7, 1)]);
        assert_eq!(cart.increment(ProductId::new(5)).map(|p| p.amount), Some(3));
        assert_eq!(ids(&cart), vec![1, 5, 7]);
        assert!(cart.increment(ProductId::new(9)).is_none());
    }

    #[test]
    fn test_set_amount() {
        let mut cart = Cart::from(vec![line(1, 1), line(2, 1)]);
        assert_eq!(cart.set_amount(ProductId::new(2), 4).map(|p| p.amount), Some(4));
        assert!(cart.set_amount(ProductId::new(2), 0).is_none());
        assert!(cart.set_amount(ProductId::new(3), 2).is_none());
        assert_eq!(cart.amount_of(ProductId::new(2)), 4);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::from(vec![line(1, 1), line(2, 3)]);
        let removed = cart.remove(ProductId::new(1)).unwrap();
        assert_eq!(removed.id, ProductId::new(1));
        assert_eq!(ids(&cart), vec![2]);
        assert!(cart.remove(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_total() {
        let cart = Cart::from(vec![line(1, 2), line(2, 3)]);
        assert!((cart.total() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_format_is_bare_array() {
        let cart = Cart::from(vec![line(1, 2)]);
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));

        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_duplicate_stored_lines_keep_first() {
        let cart: Cart = serde_json::from_str(
            r#"[{"id":1,"title":"a","price":1.0,"image":"","amount":2},
                {"id":1,"title":"b","price":1.0,"image":"","amount":5}]"#,
        )
        .unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(ProductId::new(1)), 2);
    }
}
