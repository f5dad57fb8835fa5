//! # CLI
//!
//! This module defines the command-line interface of `routeguide` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring the server
//! address carries an `http://` or `https://` scheme).
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "routeguide",
    version,
    about = "Tour a RouteGuide gRPC server through every call shape"
)]
pub struct Cli {
    /// The server URL to connect to (e.g. http://localhost:50051)
    #[arg(long, default_value = "http://localhost:50051", value_parser = parse_addr)]
    pub addr: String,

    /// Path to the feature database (JSON) the recorded route is sampled from
    #[arg(long = "db-path", alias = "db_path")]
    pub db_path: PathBuf,
}

fn parse_addr(value: &str) -> Result<String, String> {
    let value = value.trim();

    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(format!(
            "Invalid server address: '{value}'. Expected 'http://host:port'"
        ));
    }

    Ok(value.to_string())
}
