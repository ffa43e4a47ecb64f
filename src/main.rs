//! Fulfillment endpoint HTTP server - main entry point.
//!
//! Routes:
//! - `POST /drop_ship`: acknowledge a drop-ship request
//! - `POST /validate_address`: validate the order's shipping address
//! - `GET /health`: liveness probe

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use fulfillment_endpoint::http::HttpServer;
use fulfillment_endpoint::Config;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fulfillment-endpoint", version, about)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, env = "FULFILLMENT_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file and environment.
    #[arg(long)]
    listen: Option<String>,

    /// Log output format.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_env_overrides();
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen;
    }
    if let Some(format) = cli.log_format {
        config.observability.json_logs = matches!(format, LogFormat::Json);
    }

    // Initialize observability
    fulfillment_endpoint::observability::init_tracing(&config.observability);

    let server = HttpServer::new(&config)?;
    let cancel = server.cancel_token();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            cancel.cancel();
        }
    });

    tracing::info!(
        zipcode_min = config.validation.zipcode_min,
        zipcode_max = config.validation.zipcode_max,
        "Fulfillment endpoint starting on {}",
        config.server.listen_addr
    );

    server.serve().await?;
    Ok(())
}
