//! Gateway error types.
//!
//! These cover starting and running the servers. Per-request failures never
//! become a `GatewayError`: they are answered with a failure response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),
}
