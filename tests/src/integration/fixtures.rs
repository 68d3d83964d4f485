//! Shared fixtures for the integration scenarios.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use shared_types::CreateTicketRequest;
use ticket_server::container::ServerConfig;
use ticket_server::TicketServer;
use tk_03_auth_session::{CredentialStore, CredentialStoreError, InMemoryCredentialStore};
use tk_05_api_gateway::GatewayHandle;

pub const SPEEDING: &str = "Przekroczenie prędkości o 31-40";
pub const PARKING: &str = "Nieprawidłowe parkowanie";
pub const OFFICER: &str = "1001";
pub const PASSWORD: &str = "haslo123";
pub const PESEL: &str = "12345678901";

/// Default configuration with both bindings on ephemeral ports.
pub fn ephemeral_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.gateway.http.port = 0;
    config.gateway.line.port = 0;
    config
}

/// Start a server with the built-in offenses and the default officer.
pub async fn start_server() -> (TicketServer, GatewayHandle) {
    let server = TicketServer::new(ephemeral_config()).await.unwrap();
    let handle = server.start().await.unwrap();
    (server, handle)
}

/// `/api` endpoint URL of a running server.
pub fn envelope_url(handle: &GatewayHandle) -> String {
    format!("http://{}/api", handle.http_addr().unwrap())
}

pub fn ticket_request(offense: &str, fine: i64, points: i64, recidivist: bool) -> CreateTicketRequest {
    CreateTicketRequest {
        driver: "Jan Kowalski, Toyota Corolla WA 12345".into(),
        pesel: PESEL.into(),
        offense: offense.into(),
        fine: Some(fine),
        penalty_points: Some(points),
        service_number: OFFICER.into(),
        recidivist,
    }
}

/// Credential store that counts lookups.
pub struct CountingCredentialStore {
    inner: InMemoryCredentialStore,
    lookups: Arc<AtomicUsize>,
}

impl CountingCredentialStore {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let lookups = Arc::new(AtomicUsize::new(0));
        let store = Self {
            inner: InMemoryCredentialStore::from_pairs([(OFFICER, PASSWORD)]),
            lookups: Arc::clone(&lookups),
        };
        (store, lookups)
    }
}

#[async_trait]
impl CredentialStore for CountingCredentialStore {
    async fn lookup_password(
        &self,
        service_number: &str,
    ) -> Result<Option<String>, CredentialStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup_password(service_number).await
    }
}
