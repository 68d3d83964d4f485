//! # Officer Session
//!
//! One authenticated officer plus the offense catalog loaded for them.
//!
//! ```text
//! login(sn, pw) ──→ authenticate ──→ load catalog ──→ [READY]
//!      │                 │                │
//!      ▼                 ▼                ▼
//! IncompleteInput  AuthenticationFailed  Catalog
//! ```
//!
//! Tickets are checked locally with the same pipeline the server runs, so
//! most mistakes are reported without a round trip. The server's answer is
//! authoritative.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use shared_types::{
    Amount, CreateTicketRequest, FailureKind, StatusResponse, TicketId, TicketSummary,
};
use thiserror::Error;
use tk_01_offense_catalog::{CatalogError, CatalogLoader, OffenseCatalog, DEFAULT_LOAD_TIMEOUT};
use tk_04_ticket_service::{prepare, IssueError};
use tracing::{info, warn};

use crate::api::{ClientError, HttpOffenseSource, TicketApiClient};
use crate::domain::form::{FormError, TicketForm};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Fields must not be empty")]
    IncompleteInput,

    #[error("{0}")]
    AuthenticationFailed(String),

    #[error("Offense catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("{message}")]
    Rejected { kind: FailureKind, message: String },

    #[error(transparent)]
    Transport(#[from] ClientError),
}

impl From<IssueError> for SessionError {
    fn from(e: IssueError) -> Self {
        Self::Rejected {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

impl SessionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::IncompleteInput => FailureKind::IncompleteInput,
            Self::AuthenticationFailed(_) => FailureKind::AuthenticationFailed,
            Self::Catalog(_) => FailureKind::TransportFailure,
            Self::Form(e) => e.kind(),
            Self::Rejected { kind, .. } => *kind,
            Self::Transport(e) => e.kind(),
        }
    }
}

/// A successfully issued ticket as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuedTicket {
    pub ticket_id: TicketId,
    pub fine_amount: Amount,
}

pub struct OfficerSession {
    client: Arc<TicketApiClient>,
    service_number: String,
    catalog: OffenseCatalog,
}

impl OfficerSession {
    /// Authenticate and load the catalog with the default load timeout.
    pub async fn login(
        client: Arc<TicketApiClient>,
        service_number: &str,
        password: &str,
    ) -> Result<Self, SessionError> {
        Self::login_with_timeout(client, service_number, password, DEFAULT_LOAD_TIMEOUT).await
    }

    pub async fn login_with_timeout(
        client: Arc<TicketApiClient>,
        service_number: &str,
        password: &str,
        load_timeout: Duration,
    ) -> Result<Self, SessionError> {
        let service_number = service_number.trim();
        if service_number.is_empty() || password.is_empty() {
            return Err(SessionError::IncompleteInput);
        }

        let status = client.authenticate(service_number, password).await?;
        if !status.success {
            warn!(service_number, "Login rejected");
            return Err(match status.error {
                Some(FailureKind::IncompleteInput) => SessionError::IncompleteInput,
                _ => SessionError::AuthenticationFailed(
                    status
                        .message
                        .unwrap_or_else(|| "Invalid service number or password".to_string()),
                ),
            });
        }

        let catalog = CatalogLoader::new(Arc::new(HttpOffenseSource::new(Arc::clone(&client))))
            .with_timeout(load_timeout)
            .load()
            .await?;
        info!(service_number, offenses = catalog.len(), "Officer logged in");

        Ok(Self {
            client,
            service_number: service_number.to_string(),
            catalog,
        })
    }

    pub fn service_number(&self) -> &str {
        &self.service_number
    }

    pub fn catalog(&self) -> &OffenseCatalog {
        &self.catalog
    }

    /// Check `form` locally, then submit it.
    pub async fn issue(&self, form: &TicketForm) -> Result<IssuedTicket, SessionError> {
        let draft = form.to_draft(&self.service_number)?;
        let local = prepare(&draft, &self.catalog, Utc::now())?;

        let request = CreateTicketRequest {
            driver: draft.driver_description,
            pesel: draft.personal_id,
            offense: draft.offense_name,
            fine: draft.fine_amount,
            penalty_points: draft.penalty_points,
            service_number: draft.issuer_id,
            recidivist: draft.is_recidivist,
        };
        let response = self.client.create_ticket(request).await?;

        match (response.success, response.ticket_id, response.fine_amount) {
            (true, Some(ticket_id), Some(fine_amount)) => {
                if fine_amount != local.fine_amount {
                    warn!(
                        local = local.fine_amount,
                        server = fine_amount,
                        "Server computed a different fine"
                    );
                }
                info!(ticket_id, fine_amount, "Ticket issued");
                Ok(IssuedTicket {
                    ticket_id,
                    fine_amount,
                })
            }
            _ => Err(SessionError::Rejected {
                kind: response.error.unwrap_or(FailureKind::PersistenceFailed),
                message: response
                    .message
                    .unwrap_or_else(|| IssueError::PersistenceFailed.to_string()),
            }),
        }
    }

    /// Cancel a ticket. `Ok(false)` when the server reports nothing was
    /// cancelled.
    pub async fn cancel(&self, ticket_id: TicketId) -> Result<bool, SessionError> {
        let StatusResponse { success, .. } = self.client.cancel_ticket(ticket_id).await?;
        if success {
            info!(ticket_id, "Ticket cancelled");
        }
        Ok(success)
    }

    pub async fn driver_tickets(&self, pesel: &str) -> Result<Vec<TicketSummary>, SessionError> {
        if pesel.trim().is_empty() {
            return Err(SessionError::IncompleteInput);
        }
        Ok(self.client.driver_tickets(pesel.trim()).await?)
    }
}
