//! HTTP/JSON binding.
//!
//! | Route | Method | Body | Answer |
//! |-------|--------|------|--------|
//! | `/api` | POST | envelope | envelope |
//! | `/api/login` | POST | `AuthRequest` | `StatusResponse` |
//! | `/api/offences` | POST | (ignored) | `{"offences": [...]}` |
//! | `/api/createTicket` | POST | `CreateTicketRequest` | `TicketResponse` |
//! | `/api/cancelTicket` | POST | `CancelTicketRequest` | `StatusResponse` |
//! | `/api/tickets` | POST | `DriverTicketsRequest` | `{"tickets": [...]}` or `StatusResponse` |
//! | `/health` | GET | | `{"status": "ok"}` |
//!
//! Undecodable bodies get `400` with a `malformedRequest` status. Every
//! other outcome, including rejected tickets, is `200` with `success: false`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response as HttpResponse},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use shared_types::{FailureKind, Response, StatusResponse};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

use crate::domain::GatewayConfig;
use crate::handler::RequestHandler;

type AppState = Arc<RequestHandler>;

/// Build the HTTP router with its middleware stack.
pub fn build_router(handler: Arc<RequestHandler>, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(config.limits.max_request_size))
        .layer(TimeoutLayer::new(config.timeouts.request));

    Router::new()
        .route("/api", post(handle_envelope))
        .route("/api/login", post(handle_login))
        .route("/api/offences", post(handle_offences).get(handle_offences))
        .route("/api/createTicket", post(handle_create_ticket))
        .route("/api/cancelTicket", post(handle_cancel_ticket))
        .route("/api/tickets", post(handle_driver_tickets))
        .route("/health", get(health_check))
        .layer(middleware)
        .with_state(handler)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, HttpResponse> {
    serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Malformed request body");
        (
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::rejected(
                FailureKind::MalformedRequest,
                format!("Malformed request: {e}"),
            )),
        )
            .into_response()
    })
}

async fn handle_envelope(State(handler): State<AppState>, body: String) -> HttpResponse {
    let response = handler.handle_json(&body).await;
    let status = match &response {
        Response::Failure(StatusResponse {
            error: Some(FailureKind::MalformedRequest),
            ..
        }) => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };
    (status, Json(response)).into_response()
}

async fn handle_login(State(handler): State<AppState>, body: String) -> HttpResponse {
    match decode(&body) {
        Ok(req) => Json(handler.authenticate(req).await).into_response(),
        Err(rejection) => rejection,
    }
}

async fn handle_offences(State(handler): State<AppState>) -> HttpResponse {
    Json(handler.list_offenses()).into_response()
}

async fn handle_create_ticket(State(handler): State<AppState>, body: String) -> HttpResponse {
    match decode(&body) {
        Ok(req) => Json(handler.create_ticket(req).await).into_response(),
        Err(rejection) => rejection,
    }
}

async fn handle_cancel_ticket(State(handler): State<AppState>, body: String) -> HttpResponse {
    match decode(&body) {
        Ok(req) => Json(handler.cancel_ticket(req).await).into_response(),
        Err(rejection) => rejection,
    }
}

async fn handle_driver_tickets(State(handler): State<AppState>, body: String) -> HttpResponse {
    let req = match decode(&body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };
    match handler.driver_tickets(req).await {
        Ok(list) => Json(list).into_response(),
        Err(status) => Json(status).into_response(),
    }
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
