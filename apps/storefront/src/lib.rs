//! # Storefront Library
//!
//! Application shell around `storefront-core`: state handles, commands and
//! the JSON command driver.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup & run loop)
//! ├── driver.rs       ◄─── Request routing, one JSON line in / one out
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Generic Store<R: Reducer>
//! │   ├── cart.rs     ◄─── Cart context (dispatch + derived reads)
//! │   ├── catalog.rs  ◄─── Read-only catalog
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── list_catalog
//! │   ├── cart.rs     ◄─── get_cart, add_to_cart, dispatch, submit_order
//! │   ├── counter.rs  ◄─── get_counter, dispatch_counter
//! │   └── config.rs   ◄─── get_config
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod driver;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use driver::{Driver, Response};
use state::{CatalogState, ConfigState};

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOREFRONT_* environment variables over defaults                  │
/// │                                                                         │
/// │  2. Initialize Logging ──────────────────────────────────────────────► │
/// │     • RUST_LOG, else STOREFRONT_LOG, else built-in filter               │
/// │     • Written to stderr; stdout carries responses only                  │
/// │                                                                         │
/// │  3. Load Catalog ────────────────────────────────────────────────────► │
/// │     • Embedded JSON, validated once                                     │
/// │                                                                         │
/// │  4. Serve ───────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line until EOF                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::load()?;
    init_tracing(&config);

    info!(store = %config.store_name, currency = %config.currency_code, "Starting storefront");

    let catalog = CatalogState::builtin()?;
    info!(items = catalog.items().len(), "Catalog loaded");

    let driver = Driver::new(config, catalog);
    serve(&driver, io::stdin().lock(), io::stdout().lock())?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Answers every non-blank line of `input` with one line on `output`.
pub fn serve<R, W>(driver: &Driver, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = driver.handle_line(&line);
        if let Response::Error(err) = &response {
            warn!(code = ?err.code, message = %err.message, "request failed");
        }

        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `STOREFRONT_LOG=...` - Used when `RUST_LOG` is unset
/// - Default: INFO, DEBUG for storefront crates
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
