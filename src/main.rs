//! Verifier liveness service entry point.
//!
//! Parses the command line, loads configuration from TOML, initializes
//! tracing, builds the router and serves it until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verifier::config::{resolve_log_filter, AppConfig, LogFormat, DEFAULT_CONFIG_PATH};
use verifier::create_router;
use verifier::http::start_server;

/// Verifier: liveness endpoint for the verifier service
#[derive(Parser, Debug)]
#[command(name = "verifier", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "verifier=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first: the log format comes from it
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.log_format()? {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
