//! Runtime address representation.

use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;

/// A destination address as seen by networking code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// An IPv4 or IPv6 address.
    Ip(IpAddr),
    /// A domain name or a full URL literal, passed through unresolved.
    Domain(String),
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Address::Ip(ip)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Ip(IpAddr::V6(ip)) => write!(f, "[{}]", ip),
            Address::Ip(ip) => write!(f, "{}", ip),
            Address::Domain(domain) => f.write_str(domain),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
