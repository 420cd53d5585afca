//! Configuration loading for Chalkline.
//! Reads chalkline.toml from the current directory or the path in the
//! CHALKLINE_CONFIG env var. A missing file yields the defaults, so the
//! service runs out of the box on the embedded dataset.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Optional path to a JSON dataset overriding the embedded catalog.
    #[serde(default)]
    pub dataset_path: Option<String>,
}

impl Config {
    /// Load configuration from chalkline.toml.
    /// Checks CHALKLINE_CONFIG env var first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CHALKLINE_CONFIG")
            .unwrap_or_else(|_| "chalkline.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
