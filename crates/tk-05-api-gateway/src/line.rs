//! Line-delimited JSON binding over TCP.
//!
//! One envelope per line in, one envelope per line out. A connection stays
//! open for any number of requests. A line that does not decode gets a
//! `failure` answer and the connection carries on; a line over the size
//! limit, or one that is not UTF-8, gets a `failure` answer and the
//! connection is closed. A connection that completes no line within the
//! idle timeout is closed, and shutdown closes every open connection.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use shared_types::{FailureKind, Response, StatusResponse};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::handler::RequestHandler;

/// Per-connection limits.
#[derive(Debug, Clone, Copy)]
pub struct LineLimits {
    pub max_line: usize,
    pub request_timeout: Duration,
    /// Bound on waiting for the next complete line
    pub idle_timeout: Duration,
}

/// Accept connections until `shutdown` flips to `true`, then wait for every
/// open connection to close.
pub async fn serve(
    listener: TcpListener,
    handler: Arc<RequestHandler>,
    limits: LineLimits,
    mut shutdown: watch::Receiver<bool>,
) {
    let connection_shutdown = shutdown.clone();
    let mut connections = JoinSet::new();

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    debug!(%peer, "Line connection accepted");
                    let handler = Arc::clone(&handler);
                    let shutdown = connection_shutdown.clone();
                    connections.spawn(async move {
                        let (reader, writer) = stream.into_split();
                        if let Err(e) =
                            handle_connection(reader, writer, &handler, limits, shutdown).await
                        {
                            debug!(%peer, error = %e, "Line connection ended with error");
                        }
                    });
                }
                Err(e) => warn!(error = %e, "Accept failed"),
            },
            Some(_) = connections.join_next(), if !connections.is_empty() => {}
            _ = shutdown.changed() => break,
        }
    }

    let open = connections.len();
    while connections.join_next().await.is_some() {}
    info!(closed = open, "Line server stopped");
}

/// Serve one connection until EOF, idle timeout or shutdown.
pub async fn handle_connection<R, W>(
    reader: R,
    mut writer: W,
    handler: &RequestHandler,
    limits: LineLimits,
    mut shutdown: watch::Receiver<bool>,
) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        let mut limited = (&mut reader).take(limits.max_line as u64 + 1);
        let next = limited.read_line(&mut line);
        let read = tokio::select! {
            read = tokio::time::timeout(limits.idle_timeout, next) => read,
            _ = shutdown.changed() => {
                debug!("Closing line connection for shutdown");
                return Ok(());
            }
        };

        let read = match read {
            Err(_) => {
                debug!(timeout = ?limits.idle_timeout, "Closing idle line connection");
                return Ok(());
            }
            Ok(Ok(0)) => return Ok(()),
            Ok(Ok(n)) => n,
            Ok(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                write_response(&mut writer, &Response::malformed("Request is not valid UTF-8"))
                    .await?;
                return Ok(());
            }
            Ok(Err(e)) => return Err(e),
        };

        if read > limits.max_line && !line.ends_with('\n') {
            warn!(limit = limits.max_line, "Request line too long");
            write_response(&mut writer, &Response::malformed("Request line too long")).await?;
            return Ok(());
        }

        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        let response =
            match tokio::time::timeout(limits.request_timeout, handler.handle_json(request)).await
            {
                Ok(response) => response,
                Err(_) => {
                    warn!(timeout = ?limits.request_timeout, "Request timed out");
                    Response::Failure(StatusResponse::rejected(
                        FailureKind::TransportFailure,
                        "Request timed out",
                    ))
                }
            };
        write_response(&mut writer, &response).await?;
    }
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &Response) -> io::Result<()> {
    let mut bytes = serde_json::to_vec(response).map_err(io::Error::other)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await
}
