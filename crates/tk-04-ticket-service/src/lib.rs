//! # Ticket Service Subsystem
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Turns an officer's `TicketDraft` into a persisted `Ticket`, cancels
//! tickets by id, and lists a driver's tickets.
//!
//! ## Issuance Pipeline
//!
//! ```text
//! [Collect] ──→ [Resolve] ──→ [Validate] ──→ [Adjust] ──→ [Persist] ──→ Issued(ticketId)
//!     │             │             │                           │
//!     ▼             ▼             ▼                           ▼
//! IncompleteInput UnknownOffense InvalidPersonalId       PersistenceFailed
//!                               FineOutOfRange
//!                               PenaltyOutOfRange
//! ```
//!
//! | Stage | Check | Error |
//! |-------|-------|-------|
//! | Collect | driver, personal id, offense, fine, points all present | `IncompleteInput` |
//! | Resolve | offense exists in the session catalog | `UnknownOffense` |
//! | Validate | personal id, then fine range, then penalty range | first failure only |
//! | Adjust | recidivist doubling of the entered fine | (cannot fail) |
//! | Persist | store insert returns a positive id in time | `PersistenceFailed` |
//!
//! Collect through Adjust are pure (`domain::pipeline::prepare`) and are also
//! run by the officer client for early feedback. The server re-runs them and
//! is authoritative.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! | Layer | Module | Contents |
//! |-------|--------|----------|
//! | Inner | `domain/` | `prepare`, `IssueError`, `IssuanceStage` |
//! | Middle | `ports/inbound.rs` | `TicketApi` |
//! | Middle | `ports/outbound.rs` | `TicketStore`, `TimeSource` |
//! | Outer | `adapters/` | `InMemoryTicketStore` |
//! | Service | `service.rs` | `TicketService` |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryTicketStore;
pub use domain::{prepare, IssuanceStage, IssueError, TicketStoreError};
pub use ports::{SystemTimeSource, TicketApi, TicketStore, TimeSource};
pub use service::{TicketService, DEFAULT_STORE_TIMEOUT};
