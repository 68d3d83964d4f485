//! # Adapters Module
//!
//! - `memory`: in-memory credential store

pub mod memory;

pub use memory::InMemoryCredentialStore;
