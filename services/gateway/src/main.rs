//! Trade Gateway - Main Entry Point

use anyhow::Result;
use clap::{Arg, Command};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trade_gateway::{GatewayConfig, start_server};

const DEFAULT_CONFIG_PATH: &str = "gateway.toml";

/// Command line interface
fn cli() -> Command {
    Command::new("trade-gateway")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Upload a CSV trade history and get win/loss statistics")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("routes")
                .long("routes")
                .help("Print available routes and exit")
                .action(clap::ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "trade_gateway=info,trade_reporting=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let matches = cli().get_matches();

    if matches.get_flag("routes") {
        trade_gateway::server::print_routes();
        return Ok(());
    }

    // Load configuration
    let config_path = matches
        .get_one::<String>("config")
        .map_or(DEFAULT_CONFIG_PATH, String::as_str);
    let config = match GatewayConfig::from_file(config_path) {
        Ok(config) => {
            info!("Loaded configuration from: {}", config_path);
            config
        }
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path, e);
            info!("Using default configuration");
            GatewayConfig::default()
        }
    };

    info!("Starting trade gateway v{}", env!("CARGO_PKG_VERSION"));
    info!("Server will bind to: {}", config.server_address());
    info!("Features enabled:");
    info!("  CORS: {}", config.cors.enabled);
    info!("  Tracing: {}", config.monitoring.tracing_enabled);
    info!("  Compression: {}", config.server.compression);
    info!("  Max upload size: {} bytes", config.server.max_body_size);

    if let Err(e) = start_server(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
