//! # Subsystem Container
//!
//! Builds every subsystem from a `ServerConfig` and wires them into one
//! `RequestHandler`.
//!
//! ## Initialization Order
//!
//! 1. Credential store from the seeded officers → `AuthSession`
//! 2. Ticket store + system clock → `TicketService`
//! 3. Offense source (file or built-in list) → `OffenseCatalog`
//! 4. `RequestHandler` over all three

pub mod config;
pub mod seed;

use std::sync::Arc;

use tk_01_offense_catalog::{
    CatalogError, CatalogLoader, JsonFileOffenseSource, OffenseCatalog, OffenseSource,
    StaticOffenseSource,
};
use tk_03_auth_session::{AuthSession, InMemoryCredentialStore};
use tk_04_ticket_service::{InMemoryTicketStore, SystemTimeSource, TicketService};
use tk_05_api_gateway::RequestHandler;
use tracing::info;

pub use config::{ConfigError, OfficerCredential, ServerConfig, SeedConfig, StorageConfig};

/// Server-side ticket service over the in-memory store.
pub type ServerTicketService = TicketService<InMemoryTicketStore, SystemTimeSource>;

/// Initialized subsystems.
pub struct SubsystemContainer {
    pub auth: Arc<AuthSession<InMemoryCredentialStore>>,
    pub tickets: Arc<ServerTicketService>,
    pub catalog: Arc<OffenseCatalog>,
}

impl SubsystemContainer {
    pub async fn build(config: &ServerConfig) -> Result<Self, CatalogError> {
        let credentials = InMemoryCredentialStore::from_pairs(
            config
                .seed
                .officers
                .iter()
                .map(|o| (o.service_number.clone(), o.password.clone())),
        );
        info!(officers = credentials.len(), "Credential store ready");
        let auth = AuthSession::new(credentials).with_timeout(config.storage.store_timeout);

        let tickets = TicketService::new(InMemoryTicketStore::new(), SystemTimeSource)
            .with_timeout(config.storage.store_timeout);

        let source: Arc<dyn OffenseSource> = match &config.seed.offense_file {
            Some(path) => {
                info!(path = %path.display(), "Loading offenses from file");
                Arc::new(JsonFileOffenseSource::new(path))
            }
            None => {
                info!("Loading built-in offenses");
                Arc::new(StaticOffenseSource::new(seed::builtin_offenses()?))
            }
        };
        let catalog = CatalogLoader::new(source)
            .with_timeout(config.storage.catalog_load_timeout)
            .load()
            .await?;

        Ok(Self {
            auth: Arc::new(auth),
            tickets: Arc::new(tickets),
            catalog: Arc::new(catalog),
        })
    }

    pub fn request_handler(&self) -> RequestHandler {
        RequestHandler::new(
            self.auth.clone(),
            self.tickets.clone(),
            Arc::clone(&self.catalog),
        )
    }
}
