//! Domain models for the officer client.

mod form;
mod session;

pub use form::{FormError, TicketForm};
pub use session::{IssuedTicket, OfficerSession, SessionError};
