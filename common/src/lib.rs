//! Shared models for harbor: scan targets, port ranges, the service catalog
//! and the run configuration.

pub mod config;
pub mod network;
pub mod services;

/// Logs an event that marks something the user was waiting for.
///
/// Rendered by the CLI formatter with its own symbol; otherwise a plain
/// `INFO` event.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::info!(target: "harbor::success", $($arg)*)
    };
}

#[doc(hidden)]
pub use tracing::info;
