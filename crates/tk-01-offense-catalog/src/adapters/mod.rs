//! # Adapters Module
//!
//! - `static_source`: offenses held in memory (seed data, tests)
//! - `json_file`: offenses read from a JSON document on disk

pub mod json_file;
pub mod static_source;

pub use json_file::{parse_offenses, JsonFileOffenseSource};
pub use static_source::StaticOffenseSource;
