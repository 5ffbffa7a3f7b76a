use clap::Parser;
use pricer::cli::{Cli, Commands};
use pricer::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = pricer::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Quote(args) => {
            args.execute(&config).await?;
        }
        Commands::Resolve(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Pricing: stable={} network={}",
                config.pricing.stable_symbol, config.pricing.network
            );
            println!(
                "  Cache: ttl={}s timeout={}ms",
                config.pricing.cache_ttl_secs, config.pricing.resolve_timeout_ms
            );
            println!("  API: {}", config.api.base_url);
            println!("  Registry: {} symbols", config.registry.symbols.len());
        }
    }

    Ok(())
}
