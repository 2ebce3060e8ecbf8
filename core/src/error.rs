use thiserror::Error;

/// Failures that can end a scan.
///
/// Per-port transport faults never show up here; they are reported as closed
/// ports by the probe.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The host cannot open TCP connections at all, so no port can be probed.
    #[error("networking unavailable: {0}")]
    Environment(#[source] std::io::Error),

    /// The background scan task panicked or was aborted.
    #[error("scan worker stopped unexpectedly: {0}")]
    Worker(String),
}
