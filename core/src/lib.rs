//! The harbor scan engine.
//!
//! * [`network::tcp`]: the single-port connection probe.
//! * [`session`]: per-scan state and the cancel token shared with the caller.
//! * [`scanner`]: the range loop and the background worker that runs it.

pub mod error;
pub mod network;
pub mod scanner;
pub mod session;

pub use error::ScanError;
pub use scanner::{PortProber, RangeScanner};
pub use session::{CancelToken, ProbeResult, ScanSession};
