//! Per-scan state shared between the caller and the scan loop.
//!
//! The only thing the two sides touch concurrently is the [`CancelToken`].
//! The result list is borrowed mutably by the scanner for the whole scan.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use harbor_common::network::range::PortRange;
use harbor_common::network::target::ScanTarget;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("timeout must be positive")]
    Timeout,
}

/// Cooperative stop signal.
///
/// Cloning shares the flag. Setting it never interrupts a probe in flight;
/// the scan loop only looks at it between ports.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Outcome of probing one port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub port: u16,
    pub open: bool,
    pub service: &'static str,
}

impl ProbeResult {
    pub fn open(port: u16, service: &'static str) -> Self {
        Self {
            port,
            open: true,
            service,
        }
    }
}

#[derive(Debug)]
pub struct ScanSession {
    target: ScanTarget,
    range: PortRange,
    timeout: Duration,
    cancel: CancelToken,
    pub(crate) results: Vec<ProbeResult>,
}

impl ScanSession {
    /// Starts a fresh, uncancelled session.
    ///
    /// Target and range are already validated by their own types; only the
    /// timeout is checked here.
    pub fn new(target: ScanTarget, range: PortRange, timeout: Duration) -> Result<Self, SessionError> {
        if timeout.is_zero() {
            return Err(SessionError::Timeout);
        }

        Ok(Self {
            target,
            range,
            timeout,
            cancel: CancelToken::new(),
            results: Vec::new(),
        })
    }

    pub fn target(&self) -> &ScanTarget {
        &self.target
    }

    pub fn range(&self) -> PortRange {
        self.range
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Open ports found so far, ascending.
    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    /// A handle the caller keeps to stop the scan from another task.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Clears the stop flag and the accumulated results so the session can be
    /// scanned again. Tokens handed out earlier stay connected.
    pub fn reset(&mut self) {
        self.cancel.reset();
        self.results.clear();
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn session() -> ScanSession {
        let target = ScanTarget::Addr(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let range = PortRange::new(1, 10).unwrap();
        ScanSession::new(target, range, Duration::from_millis(100)).unwrap()
    }

    #[test]
    fn new_session_starts_uncancelled() {
        let session = session();
        assert!(!session.is_cancelled());
        assert!(session.results().is_empty());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let target = ScanTarget::Addr(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let range = PortRange::single(80).unwrap();
        assert_eq!(
            ScanSession::new(target, range, Duration::ZERO).unwrap_err(),
            SessionError::Timeout
        );
    }

    #[test]
    fn token_clone_cancels_session() {
        let session = session();
        let token = session.cancel_token();

        std::thread::spawn(move || token.cancel()).join().unwrap();

        assert!(session.is_cancelled());
    }

    #[test]
    fn reset_clears_flag_and_results() {
        let mut session = session();
        let token = session.cancel_token();
        session.results.push(ProbeResult::open(22, "SSH"));
        session.cancel();

        session.reset();

        assert!(!session.is_cancelled());
        assert!(!token.is_cancelled());
        assert!(session.results().is_empty());

        token.cancel();
        assert!(session.is_cancelled());
    }
}
