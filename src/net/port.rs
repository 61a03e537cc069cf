//! Ports and port intervals.

use serde::Serialize;
use std::fmt;

/// A network port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Port(pub u16);

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self(port)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive port interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PortRange {
    pub from: Port,
    pub to: Port,
}

impl PortRange {
    /// Returns true if `port` lies within the interval.
    pub fn contains(&self, port: Port) -> bool {
        self.from <= port && port <= self.to
    }
}

/// A union of port intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortList {
    pub ranges: Vec<PortRange>,
}

impl PortList {
    /// Returns true if any interval contains `port`.
    pub fn contains(&self, port: Port) -> bool {
        self.ranges.iter().any(|r| r.contains(port))
    }
}
