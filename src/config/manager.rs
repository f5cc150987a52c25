use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::deepl::ClientConfig;
use crate::paths;

/// Environment variable holding the authentication key.
pub const AUTH_KEY_ENV: &str = "DPL_AUTH_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "DPL_API_URL";

/// Base URL used when nothing overrides it. The free-tier endpoint; paid
/// accounts point `api_url` at `https://api.deepl.com`.
pub const DEFAULT_API_URL: &str = "https://api-free.deepl.com";

/// The configuration file structure.
///
/// Corresponds to `~/.config/dpl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Authentication key for the DeepL API.
    #[serde(default)]
    pub auth_key: Option<String>,
    /// Base URL of the DeepL API.
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Loads the configuration file from the standard location.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    /// Reads and parses the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read {}", self.config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.config_path.display()))
    }

    /// Like [`ConfigManager::load`], but a broken file counts as absent.
    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI overrides that take precedence over environment and config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Authentication key override.
    pub auth_key: Option<String>,
    /// API base URL override.
    pub api_url: Option<String>,
}

/// Resolves the client configuration by layering sources.
///
/// Priority order (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (`DPL_AUTH_KEY`, `DPL_API_URL`)
/// 3. Config file
/// 4. Built-in default (base URL only)
///
/// # Errors
///
/// Returns an error when no source supplies an authentication key.
pub fn resolve_config(options: &ResolveOptions, file: &ConfigFile) -> Result<ClientConfig> {
    let auth_key = options
        .auth_key
        .clone()
        .or_else(|| env_var(AUTH_KEY_ENV))
        .or_else(|| file.auth_key.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'auth_key'\n\n\
                 Please provide it via:\n  \
                 - CLI option: dpl --auth_key <key> ...\n  \
                 - Environment variable: {AUTH_KEY_ENV}\n  \
                 - Config file: add 'auth_key' to ~/.config/dpl/config.toml"
            )
        })?;

    let base_url = options
        .api_url
        .clone()
        .or_else(|| env_var(API_URL_ENV))
        .or_else(|| file.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Ok(ClientConfig { base_url, auth_key })
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
