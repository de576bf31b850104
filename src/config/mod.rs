mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies the
/// `HOST`/`PORT` overrides.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = resolve(explicit_path.as_deref(), DEFAULT_CONFIG_PATH).await?;

    apply_overrides(&mut config, env::var("HOST").ok(), env::var("PORT").ok())?;

    Ok(config)
}

/// A missing `default_path` falls back to built-in defaults; a missing
/// `explicit_path` is an error.
pub async fn resolve(explicit_path: Option<&str>, default_path: &str) -> Result<Config> {
    match explicit_path {
        Some(path) => load_from(path).await,
        None if Path::new(default_path).exists() => load_from(default_path).await,
        None => {
            debug!("No {} found, using default configuration", default_path);
            Ok(Config::default())
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    validate(&config)?;

    Ok(config)
}

pub fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<String>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }

    if let Some(port) = port {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    if config.search.max_results == 0 {
        return Err(Error::config("search.max_results must be at least 1"));
    }

    if config.search.base_url.is_empty() || config.search.fallback_url.is_empty() {
        return Err(Error::config("search URLs must not be empty"));
    }

    Ok(())
}
