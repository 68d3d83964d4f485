//! Ticket server executable.

use anyhow::{Context, Result};
use ticket_server::container::ServerConfig;
use ticket_server::TicketServer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("TK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::load().context("invalid configuration")?;

    let server = TicketServer::new(config).await?;
    let handle = server.start().await?;

    info!("Server is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    handle.shutdown().await;
    Ok(())
}
