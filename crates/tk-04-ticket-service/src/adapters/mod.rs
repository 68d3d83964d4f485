//! # Adapters Module
//!
//! - `memory`: in-memory ticket store (single lock, monotonic ids)

pub mod memory;

pub use memory::InMemoryTicketStore;
