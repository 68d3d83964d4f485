//! In-memory credential store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::CredentialStoreError;
use crate::ports::CredentialStore;

#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    credentials: RwLock<HashMap<String, String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(service_number, password)` pairs. Later pairs
    /// replace earlier ones with the same service number.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let credentials = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            credentials: RwLock::new(credentials),
        }
    }

    pub fn insert(&self, service_number: impl Into<String>, password: impl Into<String>) {
        self.credentials
            .write()
            .insert(service_number.into(), password.into());
    }

    pub fn len(&self) -> usize {
        self.credentials.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.read().is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn lookup_password(
        &self,
        service_number: &str,
    ) -> Result<Option<String>, CredentialStoreError> {
        Ok(self.credentials.read().get(service_number).cloned())
    }
}
