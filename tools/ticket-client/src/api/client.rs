//! Protocol client for the ticket server.

use std::time::Duration;

use reqwest::Client;
use shared_types::{
    AuthRequest, CancelTicketRequest, CreateTicketRequest, DriverTicketsRequest, FailureKind,
    Offense, Request, Response, StatusResponse, TicketId, TicketResponse, TicketSummary,
};
use thiserror::Error;
use tracing::debug;

/// Default server endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api";

/// Errors that can occur when talking to the ticket server.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The server answered with a `failure` envelope.
    #[error("{message}")]
    Rejected { kind: FailureKind, message: String },
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected { kind, .. } => *kind,
            _ => FailureKind::TransportFailure,
        }
    }
}

/// Ticket server client.
pub struct TicketApiClient {
    client: Client,
    endpoint: String,
}

impl TicketApiClient {
    /// Create a new client for `endpoint` (the server's `/api` URL).
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one envelope and decode the answer.
    pub async fn call(&self, request: &Request) -> Result<Response, ClientError> {
        debug!(kind = request.kind(), endpoint = %self.endpoint, "Sending request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::Connection(format!("Cannot connect to {}", self.endpoint))
                } else {
                    ClientError::Http(e)
                }
            })?;

        let body = response.text().await?;
        match serde_json::from_str::<Response>(&body) {
            Ok(Response::Failure(status)) => Err(rejected(status)),
            Ok(response) => Ok(response),
            Err(e) => Err(ClientError::Parse(e.to_string())),
        }
    }

    pub async fn authenticate(
        &self,
        service_number: &str,
        password: &str,
    ) -> Result<StatusResponse, ClientError> {
        let request = Request::Auth(AuthRequest {
            service_number: service_number.to_string(),
            password: password.to_string(),
        });
        match self.call(&request).await? {
            Response::Auth(status) => Ok(status),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn list_offenses(&self) -> Result<Vec<Offense>, ClientError> {
        match self.call(&Request::Offenses).await? {
            Response::Offenses(list) => Ok(list.offences),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn create_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<TicketResponse, ClientError> {
        match self.call(&Request::Ticket(request)).await? {
            Response::Ticket(ticket) => Ok(ticket),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn cancel_ticket(&self, ticket_id: TicketId) -> Result<StatusResponse, ClientError> {
        match self
            .call(&Request::Cancel(CancelTicketRequest { ticket_id }))
            .await?
        {
            Response::Cancel(status) => Ok(status),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn driver_tickets(&self, pesel: &str) -> Result<Vec<TicketSummary>, ClientError> {
        let request = Request::Tickets(DriverTicketsRequest {
            pesel: pesel.to_string(),
        });
        match self.call(&request).await? {
            Response::Tickets(list) => Ok(list.tickets),
            other => Err(unexpected(&other)),
        }
    }
}

fn rejected(status: StatusResponse) -> ClientError {
    ClientError::Rejected {
        kind: status.error.unwrap_or(FailureKind::MalformedRequest),
        message: status
            .message
            .unwrap_or_else(|| "Request rejected by server".to_string()),
    }
}

fn unexpected(response: &Response) -> ClientError {
    ClientError::Parse(format!("unexpected response: {response:?}"))
}
