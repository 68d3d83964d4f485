//! # Ticket Server Runtime
//!
//! Server side of the ticket desk: authenticates officers, serves the
//! offense catalog, and persists and cancels tickets.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, `TK_CONFIG` file, environment)
//! 2. Build subsystems (credentials, ticket store, offense catalog)
//! 3. Bind the HTTP and line protocol servers
//! 4. Serve until Ctrl+C, then shut down gracefully

pub mod container;

use std::sync::Arc;

use anyhow::{Context, Result};
use tk_05_api_gateway::{ApiGatewayService, GatewayHandle};
use tracing::info;

use crate::container::{ServerConfig, SubsystemContainer};

/// The server runtime: subsystems plus the protocol gateway in front of them.
pub struct TicketServer {
    container: SubsystemContainer,
    gateway: ApiGatewayService,
}

impl TicketServer {
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let container = SubsystemContainer::build(&config)
            .await
            .context("failed to initialize subsystems")?;
        let handler = Arc::new(container.request_handler());
        let gateway = ApiGatewayService::new(config.gateway, handler)
            .context("failed to create protocol gateway")?;
        Ok(Self { container, gateway })
    }

    pub async fn start(&self) -> Result<GatewayHandle> {
        info!("===========================================");
        info!("  Ticket Server v{}", env!("CARGO_PKG_VERSION"));
        info!("  Offenses loaded: {}", self.container.catalog.len());
        info!("===========================================");
        self.gateway
            .start()
            .await
            .context("failed to start protocol servers")
    }

    pub fn container(&self) -> &SubsystemContainer {
        &self.container
    }
}
