//! TCP connect probing.
//!
//! A probe is one full handshake attempt against `(host, port)`. Name
//! resolution and the connect share a single deadline, and the stream is
//! closed as soon as it is established.

use std::future::Future;
use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;
use tracing::debug;

use crate::error::ScanError;
use crate::scanner::PortProber;

/// Returns `true` if `(host, port)` accepted a connection within
/// `probe_timeout`.
///
/// Refusals, timeouts, unreachable hosts and resolution failures all come
/// back as `false`. So does an environment that cannot open sockets at all;
/// use [`TcpProber`] to see that case as an error.
pub async fn probe(host: &str, port: u16, probe_timeout: Duration) -> bool {
    matches!(try_probe(host, port, probe_timeout).await, Ok(true))
}

/// Like [`probe`], but surfaces [`ScanError::Environment`].
pub async fn try_probe(host: &str, port: u16, probe_timeout: Duration) -> Result<bool, ScanError> {
    bounded(host, port, probe_timeout, connect_once(host, port)).await
}

/// Runs `connect` under `probe_timeout` and classifies the outcome.
async fn bounded<F>(host: &str, port: u16, probe_timeout: Duration, connect: F) -> Result<bool, ScanError>
where
    F: Future<Output = io::Result<TcpStream>>,
{
    match timeout(probe_timeout, connect).await {
        Ok(Ok(stream)) => {
            drop(stream);
            debug!("{host}:{port} accepted");
            Ok(true)
        }
        Ok(Err(e)) if is_fatal(&e) => Err(ScanError::Environment(e)),
        Ok(Err(e)) => {
            debug!("{host}:{port} failed: {e}");
            Ok(false)
        }
        Err(_elapsed) => {
            debug!("{host}:{port} timed out after {probe_timeout:?}");
            Ok(false)
        }
    }
}

/// Resolves `host` and connects to the first address only.
async fn connect_once(host: &str, port: u16) -> io::Result<TcpStream> {
    let addr = lookup_host((host, port))
        .await?
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{host} has no addresses")))?;

    TcpStream::connect(addr).await
}

fn is_fatal(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::Unsupported
}

/// The production [`PortProber`]: a plain TCP connect.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpProber;

#[async_trait]
impl PortProber for TcpProber {
    async fn probe(&self, host: &str, port: u16, probe_timeout: Duration) -> Result<bool, ScanError> {
        try_probe(host, port, probe_timeout).await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
