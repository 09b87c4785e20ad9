//! Shopfront CLI - browse the catalog, manage a cart and sign in from the
//! terminal.
//!
//! # Usage
//!
//! ```bash
//! # List products, cheapest first
//! shop products --sort price-asc
//!
//! # Search within a category
//! shop products --search premium --category electronics
//!
//! # Put two of product 3 in the cart
//! shop cart add 3 -q 2
//!
//! # Sign in as the demo administrator and open the dashboard
//! shop login -e admin@example.com -p admin
//! shop dashboard
//! ```
//!
//! # Commands
//!
//! - `products` / `product` / `categories` - Browse the catalog
//! - `cart` - Show and change the cart
//! - `login` / `register` / `logout` / `whoami` - Manage the identity
//! - `dashboard` - Admin analytics

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_storefront::config::StorefrontConfig;
use shopfront_storefront::error::Result;
use shopfront_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Shopfront storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Case-insensitive search over names and descriptions
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to show, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Sort order (featured, price-asc, price-desc, name-asc, name-desc)
        #[arg(long, default_value = "featured")]
        sort: String,
    },
    /// Show one product and similar products
    Product {
        /// Product ID
        id: String,
    },
    /// List product categories
    Categories,
    /// Show featured products
    Featured,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Sign in with a demo account
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the admin analytics dashboard
    Dashboard,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a product
    Add {
        /// Product ID
        id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product
    Remove {
        /// Product ID
        id: String,
    },
    /// Set a product's quantity
    Set {
        /// Product ID
        id: String,

        /// New quantity (values below 1 are ignored)
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove every item
    Clear,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
#[allow(clippy::print_stdout, clippy::print_stderr)]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);

    // Logs go to stderr so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_storefront=info,shopfront_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let mut state = AppState::init(&config).await;

    match run(cli, &mut state).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            e.report();
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli, state: &mut AppState) -> Result<String> {
    match cli.command {
        Commands::Products {
            search,
            category,
            sort,
        } => commands::catalog::list(state, &search, &category, &sort),
        Commands::Product { id } => commands::catalog::show(state, &id),
        Commands::Categories => Ok(commands::catalog::categories(state)),
        Commands::Featured => Ok(commands::catalog::featured(state)),
        Commands::Cart { action } => match action {
            CartAction::Show => Ok(commands::cart::show(state)),
            CartAction::Add { id, quantity } => commands::cart::add(state, &id, quantity),
            CartAction::Remove { id } => Ok(commands::cart::remove(state, &id)),
            CartAction::Set { id, quantity } => Ok(commands::cart::set(state, &id, quantity)),
            CartAction::Clear => Ok(commands::cart::clear(state)),
        },
        Commands::Login { email, password } => {
            commands::account::login(state, &email, &password).await
        }
        Commands::Register {
            email,
            password,
            name,
        } => commands::account::register(state, &email, &password, &name).await,
        Commands::Logout => Ok(commands::account::logout(state)),
        Commands::Whoami => Ok(commands::account::whoami(state)),
        Commands::Dashboard => commands::dashboard::show(state),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_set_accepts_negative_quantity() {
        let cli = Cli::try_parse_from(["shop", "cart", "set", "1", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cart {
                action: CartAction::Set { quantity: -1, .. }
            }
        ));
    }
}
