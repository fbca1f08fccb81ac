//! Plainwear CLI - Catalog inspection and demo sessions.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog (built-in fixture, or PLAINWEAR_CATALOG)
//! plainwear-cli catalog list
//!
//! # List only hats, best-rated first
//! plainwear-cli catalog list --category hat --sort rating
//!
//! # Show one product
//! plainwear-cli catalog show TS-201
//!
//! # Drive a scripted browse-to-confirmation session
//! plainwear-cli demo --email jane@example.com
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Print visible products under a filter/sort
//! - `catalog show` - Print one product by ID
//! - `demo` - Run a full cart-and-checkout session

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "plainwear-cli")]
#[command(author, version, about = "Plainwear CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run a scripted browse-to-confirmation session
    Demo {
        /// Shipping email used at the Details step
        #[arg(short, long, default_value = "demo@example.com")]
        email: String,

        /// Product IDs to add to the cart
        #[arg(short, long, default_values_t = [String::from("TS-201"), String::from("HC-101")])]
        products: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List visible products
    List {
        /// Restrict to one category (`shirt`, `pants`, `hat`)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order (`price` or `rating`)
        #[arg(short, long, default_value = "price")]
        sort: String,
    },
    /// Show one product by ID
    Show {
        /// Product ID (e.g. TS-201)
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category, sort } => {
                commands::catalog::list(category.as_deref(), &sort)?;
            }
            CatalogAction::Show { id } => commands::catalog::show(&id)?,
        },
        Commands::Demo { email, products } => {
            commands::demo::run(&email, &products).await?;
        }
    }
    Ok(())
}
