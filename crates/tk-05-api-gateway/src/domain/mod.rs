//! Gateway domain: configuration and errors.

pub mod config;
pub mod error;

pub use config::{ConfigError, GatewayConfig, HttpConfig, LimitsConfig, LineConfig, TimeoutConfig};
pub use error::GatewayError;
