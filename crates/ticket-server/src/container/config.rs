//! # Server Configuration
//!
//! Unified configuration for the gateway, the stores and the seed data.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults
//! 2. JSON file named by `TK_CONFIG`
//! 3. Environment overrides: `TK_HTTP_PORT`, `TK_LINE_PORT`, `TK_SEED_FILE`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tk_05_api_gateway::GatewayConfig;
use tracing::{info, warn};

/// Complete server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Protocol gateway (bindings, limits, request timeout).
    pub gateway: GatewayConfig,
    /// Store timeouts.
    pub storage: StorageConfig,
    /// Officers and offenses loaded at startup.
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Bound on a credential or ticket store call
    #[serde(with = "humantime_serde")]
    pub store_timeout: Duration,
    /// Bound on loading the offense catalog
    #[serde(with = "humantime_serde")]
    pub catalog_load_timeout: Duration,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(3),
            catalog_load_timeout: Duration::from_secs(5),
        }
    }
}

/// One registered officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerCredential {
    pub service_number: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Registered officers
    pub officers: Vec<OfficerCredential>,
    /// Offense document to load. The built-in list is used when unset.
    pub offense_file: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            officers: vec![OfficerCredential {
                service_number: "1001".into(),
                password: "haslo123".into(),
            }],
            offense_file: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },

    #[error(transparent)]
    Gateway(#[from] tk_05_api_gateway::ConfigError),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("no officers configured")]
    NoOfficers,
}

impl ServerConfig {
    /// Load configuration from `TK_CONFIG` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|var| std::env::var(var).ok())
    }

    /// Load using `env` to look up variables.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match env("TK_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env(&env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    fn apply_env(&mut self, env: &impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(port) = env("TK_HTTP_PORT") {
            self.gateway.http.port = parse_port("TK_HTTP_PORT", port)?;
        }
        if let Some(port) = env("TK_LINE_PORT") {
            self.gateway.line.port = parse_port("TK_LINE_PORT", port)?;
        }
        if let Some(path) = env("TK_SEED_FILE") {
            self.seed.offense_file = Some(PathBuf::from(path));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;

        if self.storage.store_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "store_timeout cannot be 0".into(),
            ));
        }
        if self.storage.catalog_load_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "catalog_load_timeout cannot be 0".into(),
            ));
        }

        if self.seed.officers.is_empty() {
            return Err(ConfigError::NoOfficers);
        }
        if self
            .seed
            .officers
            .iter()
            .any(|o| o.service_number == "1001" && o.password == "haslo123")
        {
            warn!("Built-in development officer 1001 is enabled");
        }

        Ok(())
    }
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
