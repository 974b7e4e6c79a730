use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants::{CONFIG_FILE, DEFAULT_API_URL};
use crate::error::{VoyageError, VoyageResult};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL override for the catalog API.
    pub endpoint: Option<String>,
}

pub fn load_config() -> Config {
    let Some(home_dir) = dirs::home_dir() else {
        return Config::default();
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        fs::read_to_string(&config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> VoyageResult<()> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| VoyageError::ConfigError("Could not find home directory".to_string()))?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// Resolve the catalog API base URL: environment variable first,
/// then the config file, then the built-in default.
pub fn get_endpoint() -> String {
    if let Ok(url) = env::var("VOYAGE_API_URL") {
        return url;
    }

    let config = load_config();
    if let Some(url) = config.endpoint {
        return url;
    }

    DEFAULT_API_URL.to_string()
}
