//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub portal: PortalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served for any path no route matches
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page chrome settings
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Title of the dashboard home page
    #[serde(default = "default_portal_title")]
    pub title: String,

    /// Name shown as the signed-in user in the header
    #[serde(default = "default_portal_user")]
    pub user: String,
}

fn default_portal_title() -> String {
    "SWASH Internal Portal".to_string()
}

fn default_portal_user() -> String {
    "Sai Nitish Kumar Reddy".to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            title: default_portal_title(),
            user: default_portal_user(),
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

impl LoggingConfig {
    /// True when log lines should be emitted as JSON
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
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

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is set up, so nothing is logged here; pass the
    /// returned report to [`LoadReport::log`] once a subscriber exists.
    pub fn load_default() -> (Self, LoadReport) {
        Self::load_first(&Self::default_paths(), |key| std::env::var(key).ok())
    }

    /// Candidate config files, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("swash-admin").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first readable file among `paths`, then apply overrides
    ///
    /// Files that exist but fail to load are skipped and recorded in the
    /// report. With no usable file the defaults are used.
    pub fn load_first<F>(paths: &[PathBuf], lookup: F) -> (Self, LoadReport)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut report = LoadReport::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides(&lookup);
                    report.source = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.skipped.push(e),
            }
        }

        let mut config = Config::default();
        config.apply_overrides(&lookup);
        (config, report)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    ///
    /// `PORT` keeps its conventional unprefixed name. Unparseable ports are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(port) = lookup("PORT") {
            if let Ok(p) = port.trim().parse() {
                self.server.port = p;
            }
        }
        if let Some(host) = lookup("SWASH_HOST") {
            self.server.host = host;
        }
        if let Some(dir) = lookup("SWASH_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Portal overrides
        if let Some(user) = lookup("SWASH_PORTAL_USER") {
            self.portal.user = user;
        }

        // Logging overrides
        if let Some(level) = lookup("SWASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SWASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of a config lookup
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the settings came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub skipped: Vec<ConfigError>,
}

impl LoadReport {
    /// Report for a config file named explicitly
    pub fn explicit(path: &Path) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            skipped: Vec::new(),
        }
    }

    /// Log where the config came from and every file that was skipped
    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("Ignoring config file: {}", error);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# SWASH Admin Dashboard Configuration
#
# Environment variables override these settings:
# - PORT
# - SWASH_HOST
# - SWASH_STATIC_DIR
# - SWASH_PORTAL_USER
# - SWASH_LOG_LEVEL
# - SWASH_LOG_FORMAT

[server]
# Interface to bind (0.0.0.0 listens on all interfaces)
host = "0.0.0.0"

# Listening port
port = 3000

# Directory with static assets (css, js, wasm bundle)
static_dir = "public"

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[portal]
# Title of the dashboard home page
title = "SWASH Internal Portal"

# Name shown in the page header
user = "Sai Nitish Kumar Reddy"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
