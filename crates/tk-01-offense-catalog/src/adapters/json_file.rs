//! Offense source backed by a JSON file.
//!
//! Accepts either a bare array of offenses or the `{"offences": [...]}`
//! document returned by the listing endpoint. Field names may be camelCase
//! or the legacy snake_case column names.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use shared_types::{Offense, OffenseList};
use tracing::debug;

use crate::domain::CatalogError;
use crate::ports::OffenseSource;

#[derive(Deserialize)]
#[serde(untagged)]
enum OffenseDocument {
    List(Vec<Offense>),
    Wrapped(OffenseList),
}

impl OffenseDocument {
    fn into_offenses(self) -> Vec<Offense> {
        match self {
            Self::List(offenses) => offenses,
            Self::Wrapped(list) => list.offences,
        }
    }
}

/// Parse an offense document from a JSON string.
pub fn parse_offenses(json: &str) -> Result<Vec<Offense>, CatalogError> {
    serde_json::from_str::<OffenseDocument>(json)
        .map(OffenseDocument::into_offenses)
        .map_err(|e| CatalogError::Unavailable(format!("invalid offense document: {e}")))
}

#[derive(Debug, Clone)]
pub struct JsonFileOffenseSource {
    path: PathBuf,
}

impl JsonFileOffenseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OffenseSource for JsonFileOffenseSource {
    async fn fetch_offenses(&self) -> Result<Vec<Offense>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::Unavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let offenses = parse_offenses(&contents)?;
        debug!(path = %self.path.display(), count = offenses.len(), "Read offense file");
        Ok(offenses)
    }
}
