//! Inbound (Driving) port: the ticket operations exposed to the gateway.

use async_trait::async_trait;
use shared_types::{Ticket, TicketDraft, TicketId};
use tk_01_offense_catalog::OffenseCatalog;

use crate::domain::{IssueError, TicketStoreError};

#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Run the issuance pipeline on `draft` against `catalog` and persist
    /// the result.
    async fn create(
        &self,
        draft: &TicketDraft,
        catalog: &OffenseCatalog,
    ) -> Result<Ticket, IssueError>;

    /// Delete a ticket. `false` when no ticket matched or the store failed.
    async fn cancel(&self, ticket_id: TicketId) -> bool;

    /// All tickets issued to `personal_id`, ordered by ticket id.
    async fn tickets_for(&self, personal_id: &str) -> Result<Vec<Ticket>, TicketStoreError>;
}
