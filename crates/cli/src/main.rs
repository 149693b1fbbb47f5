//! SnusIdea CLI - Inspect the storefront state engines from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Drawer totals for the seeded cart
//! snus-cli totals
//!
//! # Totals for a cart file after replaying drawer events
//! snus-cli totals --cart cart.yaml --events events.yaml
//!
//! # Navigation theme at a scroll position
//! snus-cli theme --scroll 1200 --heights 900,1100,800,1300,900,600
//!
//! # Carousel drag range
//! snus-cli carousel --content 2100 --viewport 1280
//!
//! # Search overlay body for a query
//! snus-cli search mint
//! ```
//!
//! # Commands
//!
//! - `totals` - Cart subtotal, free-shipping remainder and progress
//! - `theme` - Theme governing the navigation bar
//! - `carousel` - Drag bounds and elastic offset
//! - `search` - Suggestions or matching products

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use snusidea_storefront::config::StorefrontConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "snus-cli")]
#[command(author, version, about = "SnusIdea storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cart drawer totals
    Totals {
        /// YAML file with a list of line items (defaults to the seeded cart)
        #[arg(short, long)]
        cart: Option<PathBuf>,

        /// YAML file with a list of drawer events to replay
        #[arg(short, long)]
        events: Option<PathBuf>,
    },
    /// Detect the navigation theme at a scroll position
    Theme {
        /// Vertical scroll position in px
        #[arg(short, long, default_value_t = 0.0)]
        scroll: f64,

        /// YAML file with measured sections in document order
        #[arg(short, long, conflicts_with = "heights")]
        layout: Option<PathBuf>,

        /// Heights of the home page sections, top to bottom
        #[arg(long, value_delimiter = ',')]
        heights: Vec<f64>,
    },
    /// Compute carousel drag bounds
    Carousel {
        /// Scrollable width of the card track in px
        #[arg(long)]
        content: f64,

        /// Visible width of the carousel in px
        #[arg(long)]
        viewport: f64,

        /// Offset to resist against the bounds
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,
    },
    /// Evaluate a search overlay query
    Search {
        /// Query text (empty shows suggestions)
        #[arg(default_value = "")]
        query: String,
    },
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "snusidea_cli=info,snusidea_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Totals { cart, events } => {
            commands::totals::run(&config, cart.as_deref(), events.as_deref())?;
        }
        Commands::Theme {
            scroll,
            layout,
            heights,
        } => commands::theme::run(&config, scroll, layout.as_deref(), &heights)?,
        Commands::Carousel {
            content,
            viewport,
            offset,
        } => commands::carousel::run(&config, content, viewport, offset)?,
        Commands::Search { query } => commands::search::run(&query)?,
    }
    Ok(())
}
