//! Configuration loading, validation, and management for Contextwise.
//!
//! Loads configuration from `~/.contextwise/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use contextwise_core::Role;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.contextwise/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dashboard server configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// IP-geolocation collaborator configuration
    #[serde(default)]
    pub geolocation: GeolocationConfig,

    /// Dashboard defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub allow_public_bind: bool,
}

fn default_port() -> u16 {
    8501
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allow_public_bind: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// When false, location is always reported as unknown and no request is made.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Endpoint returning a JSON object with optional `city` and `country`.
    #[serde(default = "default_geo_endpoint")]
    pub endpoint: String,
}

fn default_true() -> bool {
    true
}
fn default_geo_endpoint() -> String {
    "https://ipinfo.io/json".into()
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_geo_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Role preselected when a request does not name one.
    #[serde(default)]
    pub default_role: Role,
}

impl AppConfig {
    /// Load configuration from the default path (~/.contextwise/config.toml).
    ///
    /// Environment variables override the file:
    /// - `CONTEXTWISE_GEO_ENDPOINT`
    /// - `CONTEXTWISE_ROLE`
    /// - `CONTEXTWISE_PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    fn apply_env_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = var("CONTEXTWISE_GEO_ENDPOINT") {
            self.geolocation.endpoint = endpoint;
        }

        if let Some(role) = var("CONTEXTWISE_ROLE") {
            self.dashboard.default_role = role
                .parse()
                .map_err(|e: contextwise_core::Error| ConfigError::ValidationError(e.to_string()))?;
        }

        if let Some(port) = var("CONTEXTWISE_PORT") {
            self.gateway.port = port.parse().map_err(|_| {
                ConfigError::ValidationError(format!("CONTEXTWISE_PORT is not a port: {port}"))
            })?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".contextwise")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.port == 0 {
            return Err(ConfigError::ValidationError(
                "gateway.port must be non-zero".into(),
            ));
        }

        let loopback = matches!(self.gateway.host.as_str(), "127.0.0.1" | "localhost" | "::1");
        if !loopback && !self.gateway.allow_public_bind {
            return Err(ConfigError::ValidationError(format!(
                "gateway.host {} is not loopback; set allow_public_bind = true to expose it",
                self.gateway.host
            )));
        }

        let endpoint = &self.geolocation.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::ValidationError(
                "geolocation.endpoint must start with http:// or https://".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
