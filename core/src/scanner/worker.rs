//! Runs a scan on its own tokio task so the caller stays free to render
//! progress and to cancel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use harbor_common::network::range::PortRange;
use harbor_common::network::target::ScanTarget;
use tokio::task::JoinHandle;
use tracing::info;

use super::{PortProber, RangeScanner};
use crate::error::ScanError;
use crate::session::{CancelToken, ProbeResult, ScanSession};

/// What a finished (or stopped) scan produced.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub target: ScanTarget,
    pub range: PortRange,
    pub open_ports: Vec<ProbeResult>,
    /// Ports actually probed.
    pub examined: usize,
    /// The scan stopped before reaching the end of the range.
    pub cancelled: bool,
    pub elapsed: Duration,
}

pub struct ScanHandle {
    cancel: CancelToken,
    task: JoinHandle<Result<ScanReport, ScanError>>,
}

impl ScanHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Waits for the scan task. A cancelled scan still yields a report.
    pub async fn join(self) -> Result<ScanReport, ScanError> {
        self.task
            .await
            .map_err(|e| ScanError::Worker(e.to_string()))?
    }
}

/// Moves `session` onto a background task and starts scanning it.
///
/// Callbacks run on the scan task, in the same order as with
/// [`RangeScanner::scan`].
pub fn spawn<P, F, G>(
    scanner: Arc<RangeScanner<P>>,
    mut session: ScanSession,
    mut on_progress: F,
    on_open_port: G,
) -> ScanHandle
where
    P: PortProber + 'static,
    F: FnMut(f64) + Send + 'static,
    G: FnMut(u16, &str) + Send + 'static,
{
    let cancel = session.cancel_token();

    let task = tokio::spawn(async move {
        let started = Instant::now();
        let mut examined: usize = 0;

        let open_ports = scanner
            .scan(
                &mut session,
                |percent| {
                    examined += 1;
                    on_progress(percent);
                },
                on_open_port,
            )
            .await?;

        let range = session.range();
        let cancelled = examined < range.len();
        let elapsed = started.elapsed();

        info!(
            "Scan of {} finished: {} open, {examined}/{} examined in {elapsed:.2?}",
            session.target(),
            open_ports.len(),
            range.len()
        );

        Ok(ScanReport {
            target: session.target().clone(),
            range,
            open_ports,
            examined,
            cancelled,
            elapsed,
        })
    });

    ScanHandle { cancel, task }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
