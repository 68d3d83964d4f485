//! Ports for ticket issuance.

pub mod inbound;
pub mod outbound;

pub use inbound::TicketApi;
pub use outbound::{SystemTimeSource, TicketStore, TimeSource};
