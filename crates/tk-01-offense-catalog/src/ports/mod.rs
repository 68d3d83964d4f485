//! Ports for the offense catalog.

pub mod outbound;

pub use outbound::OffenseSource;
