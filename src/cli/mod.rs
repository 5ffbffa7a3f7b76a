//! CLI interface for pricer
//!
//! Provides subcommands for:
//! - `quote`: Cached prices for one or more symbols
//! - `resolve`: Single uncached resolution with provenance
//! - `config`: Show effective configuration

mod quote;
mod resolve;

pub use quote::QuoteArgs;
pub use resolve::ResolveArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pricer")]
#[command(about = "Asset price resolution and caching core for the club platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cached prices for one or more symbols
    Quote(QuoteArgs),
    /// Single uncached resolution with provenance
    Resolve(ResolveArgs),
    /// Show effective configuration
    Config,
}
