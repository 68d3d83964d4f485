//! Built-in offense list, used when no offense file is configured.

use shared_types::Offense;
use tk_01_offense_catalog::{adapters::parse_offenses, CatalogError};

const BUILTIN_OFFENSES: &str = include_str!("../../seed/offenses.json");

pub fn builtin_offenses() -> Result<Vec<Offense>, CatalogError> {
    parse_offenses(BUILTIN_OFFENSES)
}
