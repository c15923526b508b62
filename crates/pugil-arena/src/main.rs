//! # Pugil
//!
//! Command-line entry point for the Pugil bout driver.
//!
//! Loads the match configuration, puts two fighters on a stage, and runs
//! a scripted exhibition bout at a fixed frame rate, reporting match
//! events through structured logs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod e2e_tests;
mod script;
mod timing;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("pugil=info".parse()?)
                .add_directive("pugil_sim=info".parse()?),
        )
        .init();

    info!("Pugil starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    app::run()?;

    info!("Pugil shutdown complete");
    Ok(())
}
