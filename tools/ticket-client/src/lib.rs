//! # Ticket Client
//!
//! Officer-side client for the ticket desk.
//!
//! - `api`: protocol client over HTTP (`TicketApiClient`) and the offense
//!   source backed by it
//! - `domain`: form parsing and the officer session (login, catalog,
//!   local pre-validation, submit, cancel)
//!
//! The client runs the same issuance pipeline as the server before sending
//! a ticket, so most mistakes are reported without a round trip. The server
//! re-validates every request and its answer is final.

pub mod api;
pub mod domain;

pub use api::{ClientError, HttpOffenseSource, TicketApiClient, DEFAULT_ENDPOINT};
pub use domain::{FormError, IssuedTicket, OfficerSession, SessionError, TicketForm};
