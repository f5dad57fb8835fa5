//! # RouteGuide CLI Entry Point
//!
//! The main executable for the RouteGuide tour. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Installs the log subscriber and parses arguments using [`cli::Cli`].
//! 2. **Connection**: Opens the one connection every demo shares via `routeguide_core`.
//! 3. **Execution**: Hands a [`RouteGuideTour`] to the [`Sequencer`], which runs the four
//!    demos in order.
//! 4. **Presentation**: Progress goes to standard output; a failed tour is reported on standard
//!    error and the process exits with a non-zero status.

mod cli;
mod formatter;

use clap::Parser;
use cli::Cli;
use formatter::{FormattedString, TerminalConsole};
use routeguide_core::{RouteGuideConnection, RouteGuideTour, Sequencer};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with the tour report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Cli::parse();

    let connection = match RouteGuideConnection::connect(&args.addr).await {
        Ok(connection) => connection,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    let console = TerminalConsole;
    let mut tour = RouteGuideTour::new(&connection, &console, args.db_path, rand::rng());
    let mut sequencer = Sequencer::new();

    if let Err(err) = sequencer.run(&mut tour).await {
        eprintln!("{}", FormattedString::from(err));
        process::exit(1);
    }

    tracing::info!(stage = %sequencer.stage(), "tour finished");
}
