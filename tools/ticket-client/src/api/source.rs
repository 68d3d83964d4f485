//! Offense source backed by the server's `listOffenses` operation.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::Offense;
use tk_01_offense_catalog::{CatalogError, OffenseSource};

use super::client::TicketApiClient;

/// Fetches the offense list over the network. Any failure leaves the
/// session without a catalog.
pub struct HttpOffenseSource {
    client: Arc<TicketApiClient>,
}

impl HttpOffenseSource {
    pub fn new(client: Arc<TicketApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OffenseSource for HttpOffenseSource {
    async fn fetch_offenses(&self) -> Result<Vec<Offense>, CatalogError> {
        self.client
            .list_offenses()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))
    }
}
