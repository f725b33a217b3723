//! Desafio Cart CLI - inspect and edit a persisted cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the stored cart
//! cart-cli show
//!
//! # Add one unit of a product
//! cart-cli add --id 1 --title "Banana" --image-url https://img/banana.png --price 10
//!
//! # Change a line's quantity
//! cart-cli increment 1
//! cart-cli decrement 1
//!
//! # Create the SQLite schema
//! CART_STORAGE_BACKEND=sqlite cart-cli migrate
//! ```
//!
//! # Commands
//!
//! - `show` - Print cart lines and totals
//! - `add` / `increment` / `decrement` - Change the cart and persist it
//! - `migrate` - Run `SQLite` storage migrations
//!
//! Storage is selected through `CART_*` environment variables; see
//! `desafio_cart::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use desafio_cart::{NewCartItem, Price, ProductId};

mod commands;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(author, version, about = "Desafio Cart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored cart
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// Product title
        #[arg(short, long)]
        title: String,

        /// Product image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// Unit price (e.g. 19.99)
        #[arg(short, long)]
        price: Price,
    },
    /// Add one unit to an existing cart line
    Increment {
        /// Product ID
        id: String,
    },
    /// Remove one unit from an existing cart line
    Decrement {
        /// Product ID
        id: String,
    },
    /// Run SQLite storage migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    // Initialize tracing, defaulting to info for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "desafio_cart=info,cart_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show => commands::cart::show().await?,
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => {
            commands::cart::add(NewCartItem::new(id, title, image_url, price)).await?;
        }
        Commands::Increment { id } => commands::cart::increment(&ProductId::new(id)).await?,
        Commands::Decrement { id } => commands::cart::decrement(&ProductId::new(id)).await?,
        Commands::Migrate => commands::migrate::run().await?,
    }
    Ok(())
}
