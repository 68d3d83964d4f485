//! # Request Handler
//!
//! Transport-independent dispatch of protocol operations onto the auth and
//! ticket subsystems. Both bindings (HTTP and line) go through here, so an
//! operation behaves the same whichever transport carried it.
//!
//! | Operation | Rejections |
//! |-----------|------------|
//! | `authenticate` | `IncompleteInput` (empty field), `AuthenticationFailed` |
//! | `list_offenses` | none |
//! | `create_ticket` | `AuthenticationFailed` (issuer), any `IssueError` |
//! | `cancel_ticket` | `NotFound` |
//! | `driver_tickets` | `IncompleteInput`, `PersistenceFailed` |

use std::sync::Arc;

use shared_types::{
    AuthRequest, CancelTicketRequest, CreateTicketRequest, DriverTicketsRequest, FailureKind,
    OffenseList, Request, Response, StatusResponse, TicketList, TicketResponse, TicketSummary,
};
use tk_01_offense_catalog::OffenseCatalog;
use tk_03_auth_session::Authenticator;
use tk_04_ticket_service::{IssueError, TicketApi};
use tracing::{debug, warn};

const EMPTY_FIELDS: &str = "Fields must not be empty";

pub struct RequestHandler {
    auth: Arc<dyn Authenticator>,
    tickets: Arc<dyn TicketApi>,
    catalog: Arc<OffenseCatalog>,
}

impl RequestHandler {
    pub fn new(
        auth: Arc<dyn Authenticator>,
        tickets: Arc<dyn TicketApi>,
        catalog: Arc<OffenseCatalog>,
    ) -> Self {
        Self {
            auth,
            tickets,
            catalog,
        }
    }

    pub fn catalog(&self) -> &OffenseCatalog {
        &self.catalog
    }

    /// Decode one JSON envelope and answer it. Undecodable input gets a
    /// `failure` response.
    pub async fn handle_json(&self, body: &str) -> Response {
        match serde_json::from_str::<Request>(body) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!(error = %e, "Malformed request");
                Response::malformed(format!("Malformed request: {e}"))
            }
        }
    }

    pub async fn handle(&self, request: Request) -> Response {
        debug!(kind = request.kind(), "Handling request");
        match request {
            Request::Auth(req) => Response::Auth(self.authenticate(req).await),
            Request::Offenses => Response::Offenses(self.list_offenses()),
            Request::Ticket(req) => Response::Ticket(self.create_ticket(req).await),
            Request::Cancel(req) => Response::Cancel(self.cancel_ticket(req).await),
            Request::Tickets(req) => match self.driver_tickets(req).await {
                Ok(list) => Response::Tickets(list),
                Err(status) => Response::Failure(status),
            },
        }
    }

    pub async fn authenticate(&self, req: AuthRequest) -> StatusResponse {
        if req.service_number.is_empty() || req.password.is_empty() {
            return StatusResponse::rejected(FailureKind::IncompleteInput, EMPTY_FIELDS);
        }
        if self
            .auth
            .authenticate(&req.service_number, &req.password)
            .await
        {
            StatusResponse::ok()
        } else {
            StatusResponse::rejected(
                FailureKind::AuthenticationFailed,
                "Invalid service number or password",
            )
        }
    }

    pub fn list_offenses(&self) -> OffenseList {
        OffenseList {
            offences: self.catalog.to_vec(),
        }
    }

    pub async fn create_ticket(&self, req: CreateTicketRequest) -> TicketResponse {
        let issuer = req.service_number.trim().to_string();
        if issuer.is_empty() || !self.auth.is_registered(&issuer).await {
            warn!(%issuer, "Ticket request from unknown officer");
            return TicketResponse::rejected(
                FailureKind::AuthenticationFailed,
                "Unknown issuing officer",
            );
        }

        let mut draft = req.into_draft();
        draft.issuer_id = issuer;
        match self.tickets.create(&draft, &self.catalog).await {
            Ok(ticket) => TicketResponse::issued(ticket.ticket_id, ticket.details.fine_amount),
            Err(e) => TicketResponse::rejected(e.kind(), e.to_string()),
        }
    }

    pub async fn cancel_ticket(&self, req: CancelTicketRequest) -> StatusResponse {
        if self.tickets.cancel(req.ticket_id).await {
            StatusResponse::ok()
        } else {
            StatusResponse::rejected(
                FailureKind::NotFound,
                format!("Ticket {} could not be cancelled", req.ticket_id),
            )
        }
    }

    pub async fn driver_tickets(
        &self,
        req: DriverTicketsRequest,
    ) -> Result<TicketList, StatusResponse> {
        if req.pesel.trim().is_empty() {
            return Err(StatusResponse::rejected(
                FailureKind::IncompleteInput,
                EMPTY_FIELDS,
            ));
        }
        match self.tickets.tickets_for(&req.pesel).await {
            Ok(tickets) => Ok(TicketList {
                tickets: tickets.iter().map(TicketSummary::from).collect(),
            }),
            Err(_) => Err(StatusResponse::rejected(
                FailureKind::PersistenceFailed,
                IssueError::PersistenceFailed.to_string(),
            )),
        }
    }
}
