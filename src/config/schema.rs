//! Configuration schema definitions.
//!
//! Document fragments are plain serde structs; every polymorphic field is one
//! of the `conf` decoder types, so a bad field fails the whole fragment.
//! `build()` turns a fragment into the values handed to the runtime.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::conf::{Credential, Endpoint, PortList, PortRange, StringList, Transport, TransportList};
use crate::net::{Address, Network, NetworkSet};
use crate::protocol::User;

/// Root configuration document.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConfConfig {
    /// Logging settings.
    pub log: ObservabilityConfig,

    /// Listening entries.
    pub inbounds: Vec<InboundConfig>,

    /// Upstream entries.
    pub outbounds: Vec<OutboundConfig>,

    /// Resolver settings.
    pub dns: DnsConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A listening entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundConfig {
    /// Identifier for logging and routing.
    #[serde(default)]
    pub tag: String,

    /// Protocol name, interpreted by the runtime.
    pub protocol: String,

    /// Listen address; the runtime picks a wildcard when absent.
    #[serde(default)]
    pub listen: Option<Endpoint>,

    /// Ports to listen on.
    pub port: PortList,

    /// Accepted transports.
    #[serde(default)]
    pub network: TransportList,

    /// Users allowed to connect.
    #[serde(default)]
    pub clients: Vec<Credential>,
}

/// An upstream entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundConfig {
    #[serde(default)]
    pub tag: String,

    pub protocol: String,

    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

/// A single upstream server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub address: Endpoint,

    pub port: PortRange,

    /// Transport to dial with (default: tcp).
    #[serde(default)]
    pub network: Option<Transport>,

    #[serde(default)]
    pub users: Vec<Credential>,
}

/// Resolver configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DnsConfig {
    /// Upstream resolvers: IPs, domains or DoH/DoQ URLs.
    pub servers: Vec<Endpoint>,

    /// Static host mappings, each to one or more addresses.
    pub hosts: BTreeMap<String, StringList>,
}

/// Runtime view of an inbound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inbound {
    pub tag: String,
    pub protocol: String,
    pub listen: Option<Address>,
    pub ports: crate::net::PortList,
    pub networks: NetworkSet,
    pub users: Vec<User>,
}

/// Runtime view of an upstream server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub address: Address,
    pub port: crate::net::PortRange,
    pub network: Network,
    pub users: Vec<User>,
}

/// Runtime view of an outbound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outbound {
    pub tag: String,
    pub protocol: String,
    pub servers: Vec<Server>,
}

impl InboundConfig {
    pub fn build(&self) -> Inbound {
        Inbound {
            tag: self.tag.clone(),
            protocol: self.protocol.clone(),
            listen: self.listen.as_ref().map(Endpoint::build),
            ports: self.port.build(),
            networks: self.network.build(),
            users: self.clients.iter().map(Credential::build).collect(),
        }
    }
}

impl ServerConfig {
    pub fn build(&self) -> Server {
        Server {
            address: self.address.build(),
            port: self.port.build(),
            network: self.network.map(|t| t.build()).unwrap_or(Network::Tcp),
            users: self.users.iter().map(Credential::build).collect(),
        }
    }
}

impl OutboundConfig {
    pub fn build(&self) -> Outbound {
        Outbound {
            tag: self.tag.clone(),
            protocol: self.protocol.clone(),
            servers: self.servers.iter().map(ServerConfig::build).collect(),
        }
    }
}
