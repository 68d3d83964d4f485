//! # Catalog Loader
//!
//! Loads a complete `OffenseCatalog` from an `OffenseSource` within a time
//! bound. Every failure (unreachable source, parse error, duplicate names,
//! timeout) is reported as `CatalogError::Unavailable`.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::domain::{CatalogError, OffenseCatalog};
use crate::ports::OffenseSource;

/// Default bound on a single catalog load.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

pub struct CatalogLoader {
    source: Arc<dyn OffenseSource>,
    timeout: Duration,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn OffenseSource>) -> Self {
        Self {
            source,
            timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn load(&self) -> Result<OffenseCatalog, CatalogError> {
        let result = match tokio::time::timeout(self.timeout, self.source.fetch_offenses()).await {
            Ok(Ok(offenses)) => OffenseCatalog::from_offenses(offenses),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(CatalogError::Unavailable(format!(
                "offense source did not answer within {:?}",
                self.timeout
            ))),
        };

        match result {
            Ok(catalog) => {
                info!(offenses = catalog.len(), "Offense catalog loaded");
                Ok(catalog)
            }
            Err(e) => {
                error!(error = %e, "Offense catalog load failed");
                Err(match e {
                    CatalogError::Unavailable(_) => e,
                    other => CatalogError::Unavailable(other.to_string()),
                })
            }
        }
    }
}
