//! CLI command implementations.

pub mod cart;

use clap::Args;
use turbo_cart::ProductId;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product to add one unit of.
    pub product_id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product whose line is removed.
    pub product_id: ProductId,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product whose amount is set.
    pub product_id: ProductId,

    /// New amount. Zero or negative values are ignored.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}
