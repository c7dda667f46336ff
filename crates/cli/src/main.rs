//! EcoSwap CLI - Marketplace front-end.
//!
//! # Usage
//!
//! ```bash
//! # Pass the sign-up or login gate
//! ecoswap signup --name Asha --email asha@example.com --password pw --confirm-password pw
//! ecoswap login --email asha@example.com --password pw
//!
//! # List a product
//! ecoswap sell --title Chair --description "Oak chair" --category Furniture --price 10 --image chair.png
//!
//! # Browse, favorite, buy
//! ecoswap products
//! ecoswap wishlist 1718000000123
//! ecoswap products --wishlist
//! ecoswap cart add 1718000000123
//! ecoswap cart show
//! ecoswap checkout
//! ```
//!
//! # Environment Variables
//!
//! - `ECOSWAP_DATA_DIR` - Where collections are stored (default: `.ecoswap`)
//! - `ECOSWAP_CURRENCY` - Display currency (default: `INR`)
//! - `RUST_LOG` - Log filter (default: `ecoswap=info,ecoswap_storefront=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ecoswap_core::ProductId;
use ecoswap_storefront::config::MarketConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "ecoswap")]
#[command(author, version, about = "EcoSwap marketplace")]
struct Cli {
    /// Data directory (overrides `ECOSWAP_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the sign-up form
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },
    /// Fill in the login form
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Show which view a path leads to
    Open {
        /// Path such as `/home`
        path: String,
    },
    /// List a product for sale
    Sell {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,

        /// Clothing, Electronic, Home Decor, Books, Toys, Furniture or Others
        #[arg(short, long, default_value = "Clothing")]
        category: String,

        #[arg(short, long)]
        price: String,

        /// Picture of the product
        #[arg(short, long)]
        image: PathBuf,
    },
    /// Show the product grid
    Products {
        /// Only show wishlisted products
        #[arg(long)]
        wishlist: bool,
    },
    /// Add or remove a product from the wishlist
    Wishlist {
        /// Product ID
        id: ProductId,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Pay for everything in the cart (simulated)
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Show the order summary
    Show,
}

fn main() {
    // Logs go to stderr so rendered views on stdout stay clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ecoswap=info,ecoswap_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is_user_error() {
            render_error(&e);
        }
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stderr)]
fn render_error(e: &CliError) {
    eprintln!("{e}");
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = MarketConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
        } => commands::auth::signup(name, email, password, confirm_password)?,
        Commands::Login { email, password } => commands::auth::login(email, password)?,
        Commands::Open { path } => commands::auth::open(&path),
        Commands::Sell {
            title,
            description,
            category,
            price,
            image,
        } => {
            let mut market = commands::open_market(&config)?;
            let draft = commands::sell::draft(title, description, category, price, &image)?;
            commands::sell::sell(&mut market, &draft, &config)?;
        }
        Commands::Products { wishlist } => {
            let market = commands::open_market(&config)?;
            commands::browse::products(&market, wishlist, &config);
        }
        Commands::Wishlist { id } => {
            let mut market = commands::open_market(&config)?;
            commands::browse::toggle_wishlist(&mut market, id)?;
        }
        Commands::Cart { action } => {
            let mut market = commands::open_market(&config)?;
            match action {
                CartAction::Add { id } => commands::cart::add(&mut market, id)?,
                CartAction::Show => commands::cart::show(&market, &config),
            }
        }
        Commands::Checkout => {
            let mut market = commands::open_market(&config)?;
            commands::cart::checkout(&mut market, &config)?;
        }
    }
    Ok(())
}
