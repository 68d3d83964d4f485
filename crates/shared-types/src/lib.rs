//! # Shared Types Crate
//!
//! This crate contains the domain entities and the wire protocol shared by
//! the ticket server subsystems and the officer client.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Offense`, `TicketDraft`, `Ticket` and the
//!   request/response envelope are defined once and used on both sides of
//!   the network boundary.
//! - **Immutable Offenses**: an `Offense` can only be built through
//!   `Offense::new` (or deserialization, which routes through it), so every
//!   instance satisfies `min <= max` and `min >= 0` for both ranges.
//! - **Transport Independence**: `protocol::Request`/`protocol::Response` are
//!   tagged variants with a stable JSON form. HTTP and line-delimited TCP
//!   bindings both carry exactly these values.

pub mod entities;
pub mod errors;
pub mod protocol;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use protocol::*;
pub use value_objects::*;
