//! Cart commands.

use anyhow::Result;
use turbo_cart::{CartStore, UpdateProductAmount};

use super::{AddArgs, RemoveArgs, UpdateArgs};
use crate::context::Context;

/// Print the cart.
pub async fn show(store: &CartStore, ctx: &Context) -> Result<()> {
    let cart = store.cart().await;
    ctx.output.cart(&cart, store.locale());
    Ok(())
}

/// Add one unit of a product.
pub async fn add(args: AddArgs, store: &CartStore, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Checking stock...");
    let result = store.add_product(args.product_id).await;
    spinner.finish_and_clear();

    let line = result?;
    ctx.output.success(&format!(
        "{} (x{})",
        line.title, line.amount
    ));
    show(store, ctx).await
}

/// Remove a product's line.
pub async fn remove(args: RemoveArgs, store: &CartStore, ctx: &Context) -> Result<()> {
    let line = store.remove_product(args.product_id).await?;
    ctx.output.success(&format!("Removed {}", line.title));
    show(store, ctx).await
}

/// Set a product's amount.
pub async fn update(args: UpdateArgs, store: &CartStore, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Checking stock...");
    let result = store
        .update_product_amount(UpdateProductAmount::new(args.product_id, args.amount))
        .await;
    spinner.finish_and_clear();

    match result? {
        Some(line) => ctx
            .output
            .success(&format!("{} (x{})", line.title, line.amount)),
        None => ctx.output.debug("No line updated."),
    }
    show(store, ctx).await
}
