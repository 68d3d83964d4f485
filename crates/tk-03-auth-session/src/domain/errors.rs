//! Credential store error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialStoreError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),

    #[error("credential store backend error: {0}")]
    Backend(String),
}
