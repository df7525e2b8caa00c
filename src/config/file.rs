//! File-based configuration loading
//!
//! Optional JSON file that overrides the listen address and the REST base URL

use super::settings::Settings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file name inside `~/.config/ppl-soap-translator/`
const HOME_CONFIG_FILE: &str = "config.json";
/// Config file name in the working directory
const LOCAL_CONFIG_FILE: &str = "ppl-soap-translator.json";

/// Server section; either field may be left out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Application configuration loaded from JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Base URL the composed REST URLs start with
    #[serde(rename = "restBaseUrl", default, skip_serializing_if = "Option::is_none")]
    pub rest_base_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig =
            serde_json::from_str(&content).with_context(|| "Failed to parse config JSON")?;

        config.validate()?;

        debug!("Loaded file configuration: {:?}", config);
        Ok(config)
    }

    /// Candidate locations, in lookup order:
    /// 1. ~/.config/ppl-soap-translator/config.json
    /// 2. ./ppl-soap-translator.json
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("ppl-soap-translator")
                    .join(HOME_CONFIG_FILE),
            );
        }
        paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
        paths
    }

    /// Load the first existing file among `paths`; none existing is fine
    pub fn load_first(paths: &[PathBuf]) -> Result<Option<Self>> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => Self::load(path).map(Some),
            None => {
                debug!("No configuration file found, using environment only");
                Ok(None)
            }
        }
    }

    /// Load configuration from default locations
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_first(&Self::default_paths())
    }

    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.rest_base_url {
            if !url.starts_with("http") {
                anyhow::bail!("Invalid restBaseUrl: {}", url);
            }
        }

        if self.server.port == Some(0) {
            anyhow::bail!("Port number cannot be 0");
        }

        Ok(())
    }

    /// Overlay the fields present in the file onto `settings`
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(host) = &self.server.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.server.port {
            settings.server.port = port;
        }
        if let Some(url) = &self.rest_base_url {
            settings.translator.rest_base_url = url.clone();
        }
    }
}
