//! API client module for communicating with the ticket server.
//!
//! Uses the tagged JSON envelope on the server's `/api` endpoint.

mod client;
mod source;

pub use client::{ClientError, TicketApiClient, DEFAULT_ENDPOINT};
pub use source::HttpOffenseSource;
