//! Chessbot status hub - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Real-time status broadcast hub for the chessbot dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via CHESSBOT_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    chessbot_telemetry::init_logging()?;

    info!("Starting chessbot hub v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > CHESSBOT_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("CHESSBOT_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = chessbot_server::AppConfig::load(&config_path)?;
    info!(port = config.hub.port, simulator = config.simulator.enabled, "Configuration loaded");

    let hub = chessbot_hub::Hub::new();
    chessbot_hub::spawn_simulator(hub.clone(), config.simulator.clone());

    chessbot_hub::run_server(hub, config.hub).await?;

    Ok(())
}
