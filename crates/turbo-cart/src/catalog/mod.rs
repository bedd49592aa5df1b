//! Product catalog module.
//!
//! Contains product metadata, cart lines and stock records.

mod product;
mod stock;

pub use product::{Product, ProductDetails};
pub use stock::Stock;
