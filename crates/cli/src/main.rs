//! ASCII Cart CLI - inspect and edit a stored cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! cart-cli list
//!
//! # Add one unit of a product
//! cart-cli add --id mug --name "ASCII Mug" --price 39.90 --image mug.png
//!
//! # Remove a product line, or everything
//! cart-cli remove mug
//! cart-cli clear
//!
//! # Item count and grand total
//! cart-cli total
//!
//! # Print the cart page markup
//! cart-cli render
//! ```
//!
//! The cart lives in the file-backed store configured by `CART_STORAGE_DIR`
//! and `CART_STORAGE_KEY` (see `ascii_cart_storefront::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};

use ascii_cart_storefront::StorefrontConfig;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(author, version, about = "ASCII shop cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cart lines in display order
    List,
    /// Add one unit of a product
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Unit price, e.g. 39.90
        #[arg(short, long)]
        price: String,

        /// Image URL or path
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Remove a product line (no-op if absent)
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Show the item count and grand total
    Total,
    /// Render the cart page fragment
    Render,
}

fn main() {
    // Logs go to stderr so command output stays pipeable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ascii_cart_cli=info,ascii_cart_core=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let cart = commands::open_cart(&config)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::List => commands::cart::list(&cart, &config, &mut out)?,
        Commands::Add {
            id,
            name,
            price,
            image,
        } => commands::cart::add(&cart, &id, &name, &price, &image, &mut out)?,
        Commands::Remove { id } => commands::cart::remove(&cart, &id, &mut out)?,
        Commands::Clear => commands::cart::clear(&cart, &mut out)?,
        Commands::Total => commands::cart::total(&cart, &config, &mut out)?,
        Commands::Render => {
            commands::render::cart_page(cart.store().storage().clone(), &config, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
