//! Command line interface
//!
//! - `serve`: run the HTTP API
//! - `analyze`: run one analysis and print the JSON result

pub mod analyze;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Campus Insight - heuristic text analysis for the school platform
#[derive(Parser)]
#[command(name = "campus-insight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Run one analysis over TEXT (or stdin) and print JSON
    Analyze(analyze::AnalyzeArgs),
}

/// Loads `.env` and the layered configuration, then installs logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Invalid configuration ({}), using defaults", e);
        AppConfig::default()
    });

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Logging already initialized: {}", e);
    }

    config
}
