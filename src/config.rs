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
    pub api: ApiConfig,

    #[serde(default)]
    pub roster: RosterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Roster and aggregation settings
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employee that check-ins are recorded against
    #[serde(default = "default_active_employee")]
    pub active_employee_id: u32,

    /// Departments reported in the department energy chart
    #[serde(default = "default_tracked_departments")]
    pub tracked_departments: Vec<String>,

    /// Fixed seed for the generated history; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_active_employee() -> u32 {
    1
}

fn default_tracked_departments() -> Vec<String> {
    vec![
        "Engineering".to_string(),
        "Design".to_string(),
        "Sales".to_string(),
    ]
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            active_employee_id: default_active_employee(),
            tracked_departments: default_tracked_departments(),
            seed: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
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
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here since this runs before tracing is set up;
    /// the caller reports the returned [`ConfigLoad`].
    pub fn load_default() -> ConfigLoad {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("moodsense").join("config.toml")),
            Some(PathBuf::from("/etc/moodsense/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates)
    }

    /// Load the first existing file in `candidates` that parses. Files that
    /// exist but fail to load are kept in [`ConfigLoad::failures`].
    pub fn load_first(candidates: &[PathBuf]) -> ConfigLoad {
        let mut failures = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigLoad {
                        config,
                        source: Some(path.clone()),
                        failures,
                    }
                }
                Err(e) => failures.push(e),
            }
        }

        ConfigLoad {
            config: Self::from_env(),
            source: None,
            failures,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `MOODSENSE_*` overrides from `lookup`. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = lookup("MOODSENSE_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("MOODSENSE_API_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }
        if let Some(origins) = lookup("MOODSENSE_CORS_ORIGINS") {
            self.api.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        // Roster overrides
        if let Some(id) = lookup("MOODSENSE_ACTIVE_EMPLOYEE").and_then(|v| v.parse().ok()) {
            self.roster.active_employee_id = id;
        }
        if let Some(seed) = lookup("MOODSENSE_SEED").and_then(|v| v.parse().ok()) {
            self.roster.seed = Some(seed);
        }

        // Logging overrides
        if let Some(level) = lookup("MOODSENSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("MOODSENSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config was read from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that were found but could not be loaded
    pub failures: Vec<ConfigError>,
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
    r#"# MoodSense Configuration
#
# Environment variables override these settings:
# - MOODSENSE_API_HOST
# - MOODSENSE_API_PORT
# - MOODSENSE_CORS_ORIGINS (comma separated)
# - MOODSENSE_ACTIVE_EMPLOYEE
# - MOODSENSE_SEED
# - MOODSENSE_LOG_LEVEL
# - MOODSENSE_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 5000

# Allowed CORS origins (empty allows any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[roster]
# Employee id that check-ins are recorded against
active_employee_id = 1

# Departments shown in the department energy chart
tracked_departments = ["Engineering", "Design", "Sales"]

# Fixed seed for generated history (omit for random)
# seed = 42

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
