//! # Storefront Entry Point
//!
//! ## Usage
//! ```bash
//! echo '{"command":"list_catalog"}' | cargo run -p storefront
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match storefront_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}
