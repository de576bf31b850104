use anyhow::Result;
use ticket_triage::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<LevelFilter> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

/// Builds the log filter. `RUST_LOG` may carry a full filter directive and
/// overrides the configured level; an invalid value of either is an error.
fn build_filter(rust_log: Option<String>, config_level: &str) -> Result<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(&directives)
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG value '{}': {}", directives, e)),
        None => validate_log_level(config_level).map(|level| EnvFilter::new(level.to_string())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = build_filter(std::env::var("RUST_LOG").ok(), &config.server.logs.level);

    let filter = match filter {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting ticket triage server (log level: {})",
        config.server.logs.level
    );
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
