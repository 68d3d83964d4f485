//! Outbound (Driven) ports for the offense catalog.

use async_trait::async_trait;
use shared_types::Offense;

use crate::domain::CatalogError;

/// Where offense definitions come from.
///
/// Implementations return the complete offense list or an error; they never
/// return a partial list.
///
/// Production: `JsonFileOffenseSource`, `StaticOffenseSource` (server),
/// an HTTP source over `listOffenses` (client).
#[async_trait]
pub trait OffenseSource: Send + Sync {
    async fn fetch_offenses(&self) -> Result<Vec<Offense>, CatalogError>;
}
