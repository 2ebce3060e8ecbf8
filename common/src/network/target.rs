//! # Scan Target Model
//!
//! Defines the host a scan is aimed at.
//!
//! A target is either:
//! * An IPv4 or IPv6 literal (e.g., `127.0.0.1`, `::1`).
//! * A DNS hostname, accepted only when hostname targets are allowed and
//!   resolved when the first probe runs.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid IP address: '{0}'")]
    InvalidAddress(String),
    #[error("invalid hostname: '{0}'")]
    InvalidHostname(String),
}

/// Returns `true` if `text` is an IPv4 dotted quad or an IPv6 literal.
///
/// Hostnames, empty strings, out-of-range octets and wrong segment counts are
/// all rejected. No resolution is attempted.
pub fn validate(text: &str) -> bool {
    text.parse::<IpAddr>().is_ok()
}

/// Represents the host to be scanned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanTarget {
    /// A literal address that passed [`validate`].
    Addr(IpAddr),
    /// A hostname, resolved at probe time.
    Name(String),
}

impl ScanTarget {
    /// Parses a target string.
    ///
    /// With `allow_hostnames` unset this accepts IP literals only, which is
    /// what the [`FromStr`] implementation does.
    pub fn parse(s: &str, allow_hostnames: bool) -> Result<Self, TargetError> {
        let s = s.trim();

        if let Ok(addr) = s.parse::<IpAddr>() {
            return Ok(ScanTarget::Addr(addr));
        }

        if !allow_hostnames {
            return Err(TargetError::InvalidAddress(s.to_string()));
        }

        if is_valid_hostname(s) {
            Ok(ScanTarget::Name(s.to_ascii_lowercase()))
        } else {
            Err(TargetError::InvalidHostname(s.to_string()))
        }
    }

    /// The host part handed to the resolver.
    pub fn host(&self) -> String {
        match self {
            ScanTarget::Addr(addr) => addr.to_string(),
            ScanTarget::Name(name) => name.clone(),
        }
    }

    pub fn is_loopback(&self) -> bool {
        match self {
            ScanTarget::Addr(addr) => addr.is_loopback(),
            ScanTarget::Name(name) => name == "localhost",
        }
    }
}

impl From<IpAddr> for ScanTarget {
    fn from(addr: IpAddr) -> Self {
        ScanTarget::Addr(addr)
    }
}

impl FromStr for ScanTarget {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanTarget::Addr(addr) => write!(f, "{addr}"),
            ScanTarget::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Checks RFC 1123 hostname syntax. A trailing root dot is tolerated.
fn is_valid_hostname(s: &str) -> bool {
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.is_empty() || s.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    // All-numeric dotted strings are malformed addresses, not names.
    if s.split('.').all(|label| label.chars().all(|c| c.is_ascii_digit())) {
        return false;
    }

    s.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
