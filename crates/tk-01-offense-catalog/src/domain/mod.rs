//! Domain layer for the offense catalog.

pub mod catalog;
pub mod errors;

pub use catalog::OffenseCatalog;
pub use errors::CatalogError;
