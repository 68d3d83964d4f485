//! # Protocol Gateway Subsystem
//!
//! **Subsystem ID:** 5
//!
//! Server side of the client/server protocol. Decodes requests, calls the
//! auth and ticket subsystems, and encodes one response per request.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  PROTOCOL GATEWAY (tk-05)                 │
//! │  ┌──────────────────┐          ┌──────────────────────┐   │
//! │  │  HTTP/JSON (axum)│          │ Line JSON (tokio TCP)│   │
//! │  │    Port 8080     │          │      Port 8081       │   │
//! │  └────────┬─────────┘          └──────────┬───────────┘   │
//! │           │  Trace → BodyLimit → Timeout  │ size + timeout│
//! │           └───────────────┬───────────────┘               │
//! │                   ┌───────┴────────┐                      │
//! │                   │ RequestHandler │                      │
//! │                   └───────┬────────┘                      │
//! └───────────────────────────┼───────────────────────────────┘
//!          ┌──────────────────┼──────────────────┐
//!          ▼                  ▼                  ▼
//!   tk-03 Authenticator  tk-04 TicketApi  tk-01 OffenseCatalog
//! ```
//!
//! # Failure Handling
//!
//! - A request that cannot be decoded gets a `failure` response; the server
//!   and (on the line binding) the connection keep running.
//! - Store and transport errors are logged by their owner and only ever
//!   reach the client as `success: false` plus a failure kind.
//!
//! # Usage
//!
//! ```ignore
//! use tk_05_api_gateway::{ApiGatewayService, GatewayConfig, RequestHandler};
//!
//! let handler = Arc::new(RequestHandler::new(auth, tickets, catalog));
//! let service = ApiGatewayService::new(GatewayConfig::default(), handler)?;
//! let handle = service.start().await?;
//! tokio::signal::ctrl_c().await?;
//! handle.shutdown().await;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod handler;
pub mod http;
pub mod line;
pub mod service;

pub use domain::{ConfigError, GatewayConfig, GatewayError};
pub use handler::RequestHandler;
pub use http::build_router;
pub use service::{ApiGatewayService, GatewayHandle};
