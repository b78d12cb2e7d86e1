mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config file (if any) and applies environment overrides.
///
/// An explicit `CONFIG_PATH` must exist; the default `config.yaml` is optional
/// so the relay can run from environment variables alone.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = if explicit_path.is_some() || Path::new(&config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        from_file(&config_path).await?
    } else {
        debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
        Config::default()
    };

    apply_env_overrides(config, |key| env::var(key).ok())
}

pub async fn from_file(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    from_yaml(&config_str)
}

pub fn from_yaml(yaml: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a map of defaults.
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Overlays environment variables on top of file/default values.
///
/// `lookup` is injected so the mapping can be exercised without touching the
/// process environment.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("ANTHROPIC_API_KEY") {
        config.llm.api_key = Some(key);
    }
    if let Some(base_url) = lookup("ANTHROPIC_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = lookup("ANTHROPIC_MODEL") {
        config.llm.model = model;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }
    Ok(config)
}
