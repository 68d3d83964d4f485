//! # Ticket Service
//!
//! Implements `TicketApi` over a `TicketStore` and a `TimeSource`. Store
//! calls are bounded by a timeout; store errors and timeouts are logged
//! here and surface only as `PersistenceFailed` (create) or `false`
//! (cancel).

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use shared_types::{Ticket, TicketDraft, TicketId};
use tk_01_offense_catalog::OffenseCatalog;
use tracing::{error, info, warn};

use crate::domain::{prepare, IssueError, TicketStoreError};
use crate::ports::{TicketApi, TicketStore, TimeSource};

/// Default bound on a single ticket store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TicketService<S: TicketStore, T: TimeSource> {
    store: S,
    clock: T,
    timeout: Duration,
}

impl<S: TicketStore, T: TimeSource> TicketService<S, T> {
    pub fn new(store: S, clock: T) -> Self {
        Self {
            store,
            clock,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn bounded<R>(
        &self,
        call: impl Future<Output = Result<R, TicketStoreError>>,
    ) -> Result<R, TicketStoreError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(TicketStoreError::Timeout))
    }
}

#[async_trait]
impl<S: TicketStore, T: TimeSource> TicketApi for TicketService<S, T> {
    async fn create(
        &self,
        draft: &TicketDraft,
        catalog: &OffenseCatalog,
    ) -> Result<Ticket, IssueError> {
        let new_ticket = prepare(draft, catalog, self.clock.now()).map_err(|e| {
            warn!(
                stage = %e.stage(),
                issuer = %draft.issuer_id,
                offense = %draft.offense_name,
                error = %e,
                "Ticket rejected"
            );
            e
        })?;

        let ticket_id = match self.bounded(self.store.insert(new_ticket.clone())).await {
            Ok(id) if id > 0 => id,
            Ok(id) => {
                error!(ticket_id = id, "Ticket store returned a non-positive id");
                return Err(IssueError::PersistenceFailed);
            }
            Err(e) => {
                error!(error = %e, issuer = %draft.issuer_id, "Ticket insert failed");
                return Err(IssueError::PersistenceFailed);
            }
        };

        info!(
            ticket_id,
            issuer = %new_ticket.issuer_id,
            offense = %new_ticket.offense_name,
            fine = new_ticket.fine_amount,
            "Ticket issued"
        );
        Ok(Ticket::new(ticket_id, new_ticket))
    }

    async fn cancel(&self, ticket_id: TicketId) -> bool {
        match self.bounded(self.store.delete(ticket_id)).await {
            Ok(true) => {
                info!(ticket_id, "Ticket cancelled");
                true
            }
            Ok(false) => {
                warn!(ticket_id, "Cancel matched no ticket");
                false
            }
            Err(e) => {
                error!(ticket_id, error = %e, "Ticket delete failed");
                false
            }
        }
    }

    async fn tickets_for(&self, personal_id: &str) -> Result<Vec<Ticket>, TicketStoreError> {
        let mut tickets = self
            .bounded(self.store.find_by_personal_id(personal_id))
            .await
            .map_err(|e| {
                error!(error = %e, "Driver ticket lookup failed");
                e
            })?;
        tickets.sort_by_key(|t| t.ticket_id);
        Ok(tickets)
    }
}
