//! Shopping cart module.
//!
//! Contains the cart value type and the stock-checked store that owns it.

mod cart;
mod store;

pub use cart::Cart;
pub use store::{CartStore, UpdateProductAmount};
