//! The offense catalog: a name-keyed, read-only set of offenses.

use std::collections::BTreeMap;

use shared_types::Offense;

use super::errors::CatalogError;

/// Name → `Offense` mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffenseCatalog {
    offenses: BTreeMap<String, Offense>,
}

impl OffenseCatalog {
    /// Build a catalog from a complete offense list.
    ///
    /// Fails on the first duplicate name. Nothing is kept on failure.
    pub fn from_offenses(
        offenses: impl IntoIterator<Item = Offense>,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for offense in offenses {
            let name = offense.name().to_string();
            if map.contains_key(&name) {
                return Err(CatalogError::Duplicate(name));
            }
            map.insert(name, offense);
        }
        Ok(Self { offenses: map })
    }

    pub fn lookup(&self, name: &str) -> Result<&Offense, CatalogError> {
        self.offenses
            .get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.offenses.contains_key(name)
    }

    /// Offense names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.offenses.keys().map(String::as_str)
    }

    /// Offenses in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Offense> {
        self.offenses.values()
    }

    pub fn to_vec(&self) -> Vec<Offense> {
        self.offenses.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.offenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offenses.is_empty()
    }
}
