//! The range scanning loop.
//!
//! [`RangeScanner`] walks a [`ScanSession`]'s port range in ascending order,
//! one probe at a time, and reports back through two callbacks:
//!
//! * `on_progress(percent)` after every port that was actually probed.
//! * `on_open_port(port, service)` for every port that accepted.
//!
//! Probing goes through the [`PortProber`] trait so the loop does not care
//! whether it is talking to the network or to a scripted stand-in.
//!
//! **Cancellation:** the session's cancel flag is read before each probe and
//! nowhere else. A probe that has started always runs to its own timeout.

use std::time::Duration;

use async_trait::async_trait;
use harbor_common::services::{SERVICE_CATALOG, ServiceCatalog};
use tracing::{debug, info, warn};

use crate::error::ScanError;
use crate::network::tcp::TcpProber;
use crate::session::{ProbeResult, ScanSession};

pub mod worker;

pub use worker::{ScanHandle, ScanReport, spawn};

/// Decides whether a single port accepts connections.
#[async_trait]
pub trait PortProber: Send + Sync {
    /// One bounded attempt. `Ok(false)` for every transport-level failure;
    /// `Err` only when probing is impossible altogether.
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> Result<bool, ScanError>;
}

pub struct RangeScanner<P = TcpProber> {
    prober: P,
    catalog: &'static ServiceCatalog,
}

impl RangeScanner<TcpProber> {
    pub fn new() -> Self {
        Self::with_prober(TcpProber)
    }
}

impl Default for RangeScanner<TcpProber> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PortProber> RangeScanner<P> {
    pub fn with_prober(prober: P) -> Self {
        Self {
            prober,
            catalog: &SERVICE_CATALOG,
        }
    }

    /// Scans the session's range and returns the open ports found, ascending.
    ///
    /// Results are also appended to the session; the returned list holds only
    /// the ports found by this call. If the session is cancelled the loop stops
    /// before the next probe and returns what it has so far; progress then ends
    /// below `100.0`.
    pub async fn scan<F, G>(
        &self,
        session: &mut ScanSession,
        mut on_progress: F,
        mut on_open_port: G,
    ) -> Result<Vec<ProbeResult>, ScanError>
    where
        F: FnMut(f64),
        G: FnMut(u16, &str),
    {
        let range = session.range();
        let host: String = session.target().host();
        let timeout: Duration = session.timeout();
        let total: usize = range.len();
        let mut completed: usize = 0;
        let first: usize = session.results.len();

        info!("Scanning {host} ports {range} ({total} ports, {timeout:?} timeout)");

        for port in range {
            if session.is_cancelled() {
                warn!("Scan of {host} stopped before port {port}");
                break;
            }

            if self.prober.probe(&host, port, timeout).await? {
                let service: &'static str = self.catalog.lookup(port.into());
                debug!("Port {port} open ({service})");
                session.results.push(ProbeResult::open(port, service));
                on_open_port(port, service);
            }

            completed += 1;
            on_progress(completed as f64 / total as f64 * 100.0);
        }

        Ok(session.results[first..].to_vec())
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
