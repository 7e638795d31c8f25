//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files, env-style credential files (the tracker
//! app's `.env.local`), and environment variable overrides. Credentials are
//! carried in explicit [`Config`] values handed to each entry point; nothing
//! is written back into the process environment.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub genai: GenAiConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hosted data store configuration
///
/// Both `url` and `anon_key` must be present before the store client can be
/// built; a partially configured store is treated as unconfigured and the
/// diagnostics degrade instead of aborting.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub url: Option<String>,

    pub anon_key: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    10
}

impl StoreConfig {
    /// Whether enough credentials are present to build a client
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().map(|u| !u.is_empty()).unwrap_or(false)
            && self
                .anon_key
                .as_deref()
                .map(|k| !k.is_empty())
                .unwrap_or(false)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Generative model catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenAiConfig {
    pub api_key: Option<String>,

    #[serde(default = "default_genai_base_url")]
    pub base_url: String,
}

fn default_genai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl GenAiConfig {
    /// Whether an API key is available
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_genai_base_url(),
        }
    }
}

/// Diagnostics runner configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    /// How many rows of each check result are printed
    #[serde(default = "default_row_preview")]
    pub row_preview: usize,
}

fn default_row_preview() -> usize {
    5
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            row_preview: default_row_preview(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration from an env-style credential file
    ///
    /// The file holds `KEY="value"` lines (the same format the tracker's web
    /// app reads). Values are collected into the returned config without
    /// touching the process environment; process variables still win over
    /// file entries.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let entries = dotenvy::from_path_iter(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        for entry in entries {
            let (key, value) = entry.map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;
            config.apply_kv(&key, value);
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        // Try default config locations
        let config_paths = [
            dirs::config_dir().map(|p| p.join("repwise").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // The tracker app keeps its credentials in .env.local
        let env_file = PathBuf::from("./.env.local");
        if env_file.exists() {
            match Self::from_env_file(&env_file) {
                Ok(config) => {
                    tracing::info!("Loaded credentials from {:?}", env_file);
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load credentials from {:?}: {}", env_file, e);
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        for key in [
            "REPWISE_STORE_URL",
            "REPWISE_STORE_ANON_KEY",
            "REPWISE_GENAI_API_KEY",
            "REPWISE_GENAI_BASE_URL",
            "REPWISE_LOG_LEVEL",
            "REPWISE_LOG_FORMAT",
        ] {
            if let Ok(value) = std::env::var(key) {
                self.apply_kv(key, value);
            }
        }
    }

    /// Apply a single recognized key-value pair from any source
    fn apply_kv(&mut self, key: &str, value: String) {
        match key {
            "REPWISE_STORE_URL" => self.store.url = Some(value),
            "REPWISE_STORE_ANON_KEY" => self.store.anon_key = Some(value),
            "REPWISE_GENAI_API_KEY" => self.genai.api_key = Some(value),
            "REPWISE_GENAI_BASE_URL" => self.genai.base_url = value,
            "REPWISE_LOG_LEVEL" => self.logging.level = value,
            "REPWISE_LOG_FORMAT" => self.logging.format = value,
            _ => {}
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            genai: GenAiConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Repwise Support Toolkit Configuration
#
# Environment variables override these settings:
# - REPWISE_STORE_URL
# - REPWISE_STORE_ANON_KEY
# - REPWISE_GENAI_API_KEY
# - REPWISE_GENAI_BASE_URL
# - REPWISE_LOG_LEVEL
# - REPWISE_LOG_FORMAT

[store]
# Hosted data store project URL
# url = "https://your-project.example.co"

# Anonymous (read-only) API key for the store
# anon_key = ""

# HTTP timeout for store requests (seconds)
request_timeout_secs = 10

[genai]
# Generative model catalog API key
# api_key = ""

# Model catalog base URL
base_url = "https://generativelanguage.googleapis.com"

[diagnostics]
# Rows printed per store check
row_preview = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
