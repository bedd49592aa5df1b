//! Cart CLI - Command line front-end for TurboCart.
//!
//! Commands:
//! - `cart show` - Print the cart
//! - `cart add <id>` - Add one unit of a product
//! - `cart remove <id>` - Remove a product's line
//! - `cart update <id> <amount>` - Set a product's amount

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use turbo_cart::CartError;

use commands::{AddArgs, RemoveArgs, UpdateArgs};

/// Cart CLI - Manage a stock-checked storefront cart
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Serve stock and products from a json-server style fixture instead of the API
    #[arg(long, global = true)]
    fixture: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart
    Show,

    /// Add one unit of a product
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Set the amount of a product in the cart
    Update(UpdateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::Output::new(cli.verbose, cli.json).error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    ctx.config.logging.init(cli.verbose);

    let result = match ctx.open_store(cli.fixture.as_deref()) {
        Ok(store) => match cli.command {
            Commands::Show => commands::cart::show(&store, &ctx).await,
            Commands::Add(args) => commands::cart::add(args, &store, &ctx).await,
            Commands::Remove(args) => commands::cart::remove(args, &store, &ctx).await,
            Commands::Update(args) => commands::cart::update(args, &store, &ctx).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        // Rejected cart operations were already shown by the store's notifier.
        match e.downcast_ref::<CartError>() {
            Some(cart_error) => tracing::debug!(error = %cart_error, "command failed"),
            None => ctx.output.error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }

    Ok(())
}
