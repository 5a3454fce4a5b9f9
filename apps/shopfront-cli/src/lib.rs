//! # Shopfront App Library
//!
//! State wiring, screen commands, and the terminal UI for the `shopfront`
//! binary.
//!
//! ## Module Organization
//! ```text
//! shopfront_app/
//! ├── lib.rs          ◄─── You are here (logging + app wiring)
//! ├── app.rs          ◄─── AppHandle state registry
//! ├── config.rs       ◄─── config.toml loading
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store + change events
//! │   ├── catalog.rs  ◄─── Product list + loading flags
//! │   ├── banner.rs   ◄─── 2 second notices
//! │   └── config.rs   ◄─── Display settings
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Home + product detail screens
//! │   └── cart.rs     ◄─── Cart screen
//! ├── ui.rs           ◄─── Line-oriented terminal UI
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse flags, initialize logging (stderr)                            │
//! │  2. Load AppConfig (file → env → flags)                                 │
//! │  3. Pick the catalog source: HttpCatalog, or StaticCatalog offline      │
//! │  4. build_app(): manage CartState, CatalogState, BannerState,           │
//! │     ConfigState                                                         │
//! │  5. ui::run(): initial load, then read commands until quit / EOF        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;

use std::sync::Arc;

use shopfront_catalog::CatalogSource;
use shopfront_core::Clock;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::AppHandle;
use config::AppConfig;
use state::{BannerState, CartState, CatalogState};

/// Registers every piece of state the commands use.
pub fn build_app(
    config: AppConfig,
    source: Arc<dyn CatalogSource>,
    clock: Arc<dyn Clock>,
) -> AppHandle {
    let mut app = AppHandle::new();

    app.manage(CartState::new(clock.clone()));
    app.manage(CatalogState::new(source, Some(config.catalog.limit)));
    app.manage(BannerState::new(clock));
    app.manage(config.display);

    info!("State initialized");
    app
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the screens on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront=trace` - Show trace for shopfront crates only
/// - Default: `info,shopfront=debug` with `--verbose`, `warn` otherwise
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "info,shopfront=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
