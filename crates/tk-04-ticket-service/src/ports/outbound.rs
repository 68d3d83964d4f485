//! Outbound (Driven) ports for ticket issuance.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{NewTicket, Ticket, TicketId};

use crate::domain::TicketStoreError;

/// Ticket persistence.
///
/// Production: `InMemoryTicketStore`. Any store with an atomic
/// insert-returning-id and delete-by-id fits.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Persist a ticket and return its new id. Ids are positive and
    /// increase with every insert.
    async fn insert(&self, ticket: NewTicket) -> Result<TicketId, TicketStoreError>;

    /// Delete by id. `Ok(false)` when no ticket had this id.
    async fn delete(&self, ticket_id: TicketId) -> Result<bool, TicketStoreError>;

    async fn find_by_personal_id(&self, personal_id: &str)
        -> Result<Vec<Ticket>, TicketStoreError>;
}

/// Time source for issue timestamps.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
