//! # Shopfront Entry Point
//!
//! Parses flags, loads config, picks the catalog source, and hands the
//! terminal to [`shopfront_app::ui::run`].

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use shopfront_app::{build_app, config::AppConfig, init_tracing, ui};
use shopfront_catalog::{CatalogSource, HttpCatalog, StaticCatalog};
use shopfront_core::SystemClock;
use tracing::{error, info};

/// Browse products and manage a shopping cart from the terminal.
#[derive(Debug, Parser)]
#[command(name = "shopfront", version, about)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of products to request
    #[arg(short, long)]
    limit: Option<u32>,

    /// Catalog API root, e.g. https://fakestoreapi.com
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Use the built-in sample catalog instead of the network
    #[arg(long)]
    offline: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match AppConfig::load(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("shopfront: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(limit) = cli.limit {
        config.catalog.limit = limit;
    }
    if let Some(base_url) = cli.base_url.clone() {
        config.catalog.base_url = base_url;
    }
    if let Err(e) = config.validate() {
        eprintln!("shopfront: {}", e);
        return ExitCode::FAILURE;
    }

    let source: Arc<dyn CatalogSource> = if cli.offline {
        info!("Using the offline sample catalog");
        Arc::new(StaticCatalog::sample().with_default_limit(config.catalog.limit))
    } else {
        match HttpCatalog::new(&config.catalog) {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                eprintln!("shopfront: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    info!(
        base_url = %config.catalog.base_url,
        limit = config.catalog.limit,
        offline = cli.offline,
        "Starting Shopfront"
    );

    let app = build_app(config, source, Arc::new(SystemClock));

    let stdin = io::stdin();
    let stdout = io::stdout();
    match ui::run(&app, stdin.lock(), stdout.lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("shopfront: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
