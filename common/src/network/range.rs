//! # Port Range Model
//!
//! A contiguous, inclusive range of TCP ports. A [`PortRange`] can only be
//! built through [`PortRange::new`] or [`FromStr`], so every value in
//! circulation already satisfies `1 <= start <= end <= 65535`.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

pub const MIN_PORT: u32 = 1;
pub const MAX_PORT: u32 = u16::MAX as u32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid port range {start}-{end} (ports must be 1-65535)")]
    OutOfBounds { start: u32, end: u32 },
    #[error("invalid port range {start}-{end} (start is greater than end)")]
    Inverted { start: u32, end: u32 },
    #[error("invalid port '{0}'")]
    Unparsable(String),
}

/// Inclusive range of ports to probe, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Validates the bounds and builds the range.
    ///
    /// Takes `u32` so that `0` and values above `65535` typed by a user reach
    /// the check instead of failing to parse.
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if start < MIN_PORT || end > MAX_PORT {
            return Err(RangeError::OutOfBounds { start, end });
        }
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }

        Ok(Self {
            start: start as u16,
            end: end as u16,
        })
    }

    pub fn single(port: u16) -> Result<Self, RangeError> {
        Self::new(port.into(), port.into())
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports in the range. Never zero.
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.start..=self.end).contains(&port)
    }

    pub fn iter(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self { start: 1, end: 1000 }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl IntoIterator for PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for PortRange {
    type Err = RangeError;

    /// Parses `"START-END"` or a single `"PORT"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('-') {
            Some((start, end)) => Self::new(parse_port(start)?, parse_port(end)?),
            None => {
                let port = parse_port(s)?;
                Self::new(port, port)
            }
        }
    }
}

fn parse_port(s: &str) -> Result<u32, RangeError> {
    let s = s.trim();
    s.parse::<u32>()
        .map_err(|_| RangeError::Unparsable(s.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
