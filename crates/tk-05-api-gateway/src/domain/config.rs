//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP/JSON binding
    pub http: HttpConfig,
    /// Line-delimited JSON over TCP binding
    pub line: LineConfig,
    /// Request size limits
    pub limits: LimitsConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.http.enabled && !self.line.enabled {
            return Err(ConfigError::NoBinding);
        }

        // Port 0 asks the OS for a free port and never collides.
        if self.http.enabled
            && self.line.enabled
            && self.http.port != 0
            && self.http.port == self.line.port
        {
            return Err(ConfigError::DuplicatePorts);
        }

        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        if self.timeouts.request.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }
        if self.timeouts.idle.is_zero() {
            return Err(ConfigError::InvalidTimeout("idle timeout cannot be 0".into()));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Get line server bind address
    pub fn line_addr(&self) -> SocketAddr {
        SocketAddr::new(self.line.host, self.line.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8080)
    pub port: u16,
    /// Enable HTTP server
    pub enabled: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8080,
            enabled: true,
        }
    }
}

/// Line protocol server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8081)
    pub port: u16,
    /// Enable line server
    pub enabled: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8081,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max request body (HTTP) or line (TCP) size in bytes (default: 64KB)
    pub max_request_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 64 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Bound on handling one request, on both bindings
    #[serde(with = "humantime_serde")]
    pub request: Duration,
    /// Line connections that send nothing for this long are closed
    #[serde(with = "humantime_serde")]
    pub idle: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
            idle: Duration::from_secs(60),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Both servers on the same port
    #[error("duplicate ports configured")]
    DuplicatePorts,
    /// Neither binding enabled
    #[error("no protocol binding enabled")]
    NoBinding,
    /// Invalid size limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// Invalid timeout value
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}
