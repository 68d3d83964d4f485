//! In-memory offense source.

use async_trait::async_trait;
use shared_types::Offense;

use crate::domain::CatalogError;
use crate::ports::OffenseSource;

#[derive(Debug, Clone, Default)]
pub struct StaticOffenseSource {
    offenses: Vec<Offense>,
}

impl StaticOffenseSource {
    pub fn new(offenses: Vec<Offense>) -> Self {
        Self { offenses }
    }
}

#[async_trait]
impl OffenseSource for StaticOffenseSource {
    async fn fetch_offenses(&self) -> Result<Vec<Offense>, CatalogError> {
        Ok(self.offenses.clone())
    }
}
