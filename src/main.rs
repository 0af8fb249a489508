use clap::Parser;
use property_valuation::cli::{format_regions, Cli, Commands};
use property_valuation::config::Config;

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
    let _telemetry = property_valuation::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Appraise(args) => {
            tracing::info!("Starting valuation");
            args.execute(&config)?;
        }
        Commands::Batch(args) => {
            tracing::info!("Starting batch valuation");
            args.execute(&config).await?;
        }
        Commands::Regions => {
            print!("{}", format_regions());
        }
        Commands::Config => {
            let sim = &config.simulation;
            println!("Current configuration:");
            println!(
                "  Simulation: drift={} volatility={} paths={} steps={} seed={}",
                sim.drift, sim.volatility, sim.paths, sim.steps, sim.seed
            );
            match config.market.as_of {
                Some(date) => println!("  Market as-of: {}", date),
                None => println!("  Market as-of: today"),
            }
            println!(
                "  Risk: LTV escalation above {}%",
                config.risk.escalation_threshold * rust_decimal_macros::dec!(100)
            );
            println!(
                "  Telemetry: level={} format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
