//! Transport protocols and transport sets.

use bitflags::bitflags;
use serde::Serialize;
use std::fmt;

/// A transport-layer protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Tcp,
    Udp,
    Unix,
}

impl Network {
    /// All known transports.
    pub const ALL: [Network; 3] = [Network::Tcp, Network::Udp, Network::Unix];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Tcp => "tcp",
            Network::Udp => "udp",
            Network::Unix => "unix",
        }
    }

    /// Matches an already-normalized (lower-case) token.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tcp" => Some(Network::Tcp),
            "udp" => Some(Network::Udp),
            "unix" => Some(Network::Unix),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of transports a rule applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NetworkSet: u8 {
        const TCP = 1 << 0;
        const UDP = 1 << 1;
        const UNIX = 1 << 2;
    }
}

impl From<Network> for NetworkSet {
    fn from(network: Network) -> Self {
        match network {
            Network::Tcp => NetworkSet::TCP,
            Network::Udp => NetworkSet::UDP,
            Network::Unix => NetworkSet::UNIX,
        }
    }
}

impl FromIterator<Network> for NetworkSet {
    fn from_iter<I: IntoIterator<Item = Network>>(iter: I) -> Self {
        iter.into_iter()
            .fold(NetworkSet::empty(), |set, n| set | NetworkSet::from(n))
    }
}

impl NetworkSet {
    /// Membership test.
    pub fn has(&self, network: Network) -> bool {
        self.contains(NetworkSet::from(network))
    }

    /// Members in canonical order.
    pub fn networks(&self) -> Vec<Network> {
        Network::ALL.into_iter().filter(|n| self.has(*n)).collect()
    }
}

impl Serialize for NetworkSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.networks().serialize(serializer)
    }
}
