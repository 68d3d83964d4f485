//! API Gateway service - binds and runs the enabled protocol servers.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::{GatewayConfig, GatewayError};
use crate::handler::RequestHandler;
use crate::http::build_router;
use crate::line::{self, LineLimits};

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    handler: Arc<RequestHandler>,
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(config: GatewayConfig, handler: Arc<RequestHandler>) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;
        Ok(Self { config, handler })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Bind every enabled server and start serving in the background.
    ///
    /// Returns once all listeners are bound, so the returned addresses are
    /// ready to accept connections.
    pub async fn start(&self) -> Result<GatewayHandle, GatewayError> {
        info!("Starting API Gateway...");
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut tasks = Vec::new();

        let http_addr = if self.config.http.enabled {
            let listener = bind(self.config.http_addr()).await?;
            let addr = local_addr(&listener)?;
            info!(%addr, "Starting HTTP server");
            let router = build_router(Arc::clone(&self.handler), &self.config);
            let mut rx = shutdown_rx.clone();
            tasks.push(tokio::spawn(async move {
                let shutdown = async move {
                    let _ = rx.changed().await;
                };
                if let Err(e) = axum::serve(listener, router)
                    .with_graceful_shutdown(shutdown)
                    .await
                {
                    error!(error = %e, "HTTP server error");
                }
                info!("HTTP server stopped");
            }));
            Some(addr)
        } else {
            None
        };

        let line_addr = if self.config.line.enabled {
            let listener = bind(self.config.line_addr()).await?;
            let addr = local_addr(&listener)?;
            info!(%addr, "Starting line server");
            let limits = LineLimits {
                max_line: self.config.limits.max_request_size,
                request_timeout: self.config.timeouts.request,
                idle_timeout: self.config.timeouts.idle,
            };
            tasks.push(tokio::spawn(line::serve(
                listener,
                Arc::clone(&self.handler),
                limits,
                shutdown_rx.clone(),
            )));
            Some(addr)
        } else {
            None
        };

        info!("API Gateway started successfully");
        Ok(GatewayHandle {
            http_addr,
            line_addr,
            shutdown_tx,
            tasks,
        })
    }
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, GatewayError> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))
}

fn local_addr(listener: &TcpListener) -> Result<SocketAddr, GatewayError> {
    listener
        .local_addr()
        .map_err(|e| GatewayError::Bind(e.to_string()))
}

/// Running servers. Dropping the handle leaves them running; call
/// [`GatewayHandle::shutdown`] to stop them.
pub struct GatewayHandle {
    http_addr: Option<SocketAddr>,
    line_addr: Option<SocketAddr>,
    shutdown_tx: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl GatewayHandle {
    /// Bound HTTP address, if the HTTP server is enabled.
    pub fn http_addr(&self) -> Option<SocketAddr> {
        self.http_addr
    }

    /// Bound line server address, if enabled.
    pub fn line_addr(&self) -> Option<SocketAddr> {
        self.line_addr
    }

    /// Trigger graceful shutdown and wait for the servers, and every
    /// connection they hold open, to stop.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for task in self.tasks {
            if let Err(e) = task.await {
                error!(error = %e, "Server task failed");
            }
        }
        info!("API Gateway stopped");
    }
}
