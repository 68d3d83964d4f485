//! # Auth Session Service
//!
//! `AuthSession` implements the `Authenticator` port over any
//! `CredentialStore`, bounding each store call by a timeout.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::{plaintext_matches, CredentialStoreError};
use crate::ports::{Authenticator, CredentialStore};

/// Default bound on a single credential store lookup.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(3);

pub struct AuthSession<S: CredentialStore> {
    store: S,
    timeout: Duration,
}

impl<S: CredentialStore> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored password for `service_number`, or `None` on miss, error or
    /// timeout. Errors and timeouts are logged here and nowhere else.
    async fn stored_password(&self, service_number: &str) -> Option<String> {
        match tokio::time::timeout(self.timeout, self.store.lookup_password(service_number)).await
        {
            Ok(Ok(password)) => password,
            Ok(Err(e)) => {
                log_store_error(service_number, &e);
                None
            }
            Err(_) => {
                warn!(
                    service_number,
                    timeout = ?self.timeout,
                    "Credential store lookup timed out"
                );
                None
            }
        }
    }
}

fn log_store_error(service_number: &str, e: &CredentialStoreError) {
    error!(service_number, error = %e, "Credential store lookup failed");
}

#[async_trait]
impl<S: CredentialStore> Authenticator for AuthSession<S> {
    async fn authenticate(&self, service_number: &str, password: &str) -> bool {
        let Some(stored) = self.stored_password(service_number).await else {
            debug!(service_number, "Authentication rejected");
            return false;
        };
        let ok = plaintext_matches(&stored, password);
        if ok {
            info!(service_number, "Officer authenticated");
        } else {
            debug!(service_number, "Authentication rejected");
        }
        ok
    }

    async fn is_registered(&self, service_number: &str) -> bool {
        self.stored_password(service_number).await.is_some()
    }
}
