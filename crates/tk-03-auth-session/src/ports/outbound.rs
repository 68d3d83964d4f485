//! Outbound (Driven) port: where credentials live.

use async_trait::async_trait;

use crate::domain::CredentialStoreError;

/// Maps a service number to its stored password.
///
/// Production: `InMemoryCredentialStore` seeded from server configuration.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// `Ok(None)` when the service number is unknown.
    async fn lookup_password(
        &self,
        service_number: &str,
    ) -> Result<Option<String>, CredentialStoreError>;
}
