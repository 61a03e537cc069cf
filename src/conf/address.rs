//! Endpoint decoding.
//!
//! # Disambiguation order
//! 1. IP literal (IPv4, IPv6, bracketed IPv6)
//! 2. anything containing `://` is a URL, kept verbatim
//! 3. everything else is a domain, kept verbatim
//!
//! Domains are never resolved here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::net::IpAddr;
use url::Url;

use super::error::{DecodeError, DecodeResult};
use crate::net::Address;

/// A configured endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ip(IpAddr),
    Domain(String),
    Url(String),
}

impl Endpoint {
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::String(s) => Ok(Self::parse(s)),
            other => Err(DecodeError::type_mismatch("string", other)),
        }
    }

    /// Classifies a literal. Every string maps to some variant.
    pub fn parse(literal: &str) -> Self {
        if let Some(ip) = parse_ip(literal) {
            tracing::trace!(%ip, "endpoint is an IP literal");
            return Endpoint::Ip(ip);
        }
        if literal.contains("://") {
            tracing::trace!(url = literal, "endpoint is a URL");
            return Endpoint::Url(literal.to_string());
        }
        Endpoint::Domain(literal.to_string())
    }

    /// The IP address, if this endpoint is one.
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Endpoint::Ip(ip) => Some(*ip),
            _ => None,
        }
    }

    /// Domain-like text. URL endpoints return the whole URL literal.
    pub fn domain(&self) -> Option<&str> {
        match self {
            Endpoint::Ip(_) => None,
            Endpoint::Domain(domain) => Some(domain),
            Endpoint::Url(url) => Some(url),
        }
    }

    /// Parsed form of a URL endpoint.
    ///
    /// Returns `None` for IP and domain endpoints, and for URL literals the
    /// `url` crate refuses.
    pub fn url(&self) -> Option<Url> {
        match self {
            Endpoint::Url(literal) => Url::parse(literal).ok(),
            _ => None,
        }
    }

    pub fn build(&self) -> Address {
        match self {
            Endpoint::Ip(ip) => Address::Ip(*ip),
            Endpoint::Domain(text) | Endpoint::Url(text) => Address::Domain(text.clone()),
        }
    }
}

fn parse_ip(literal: &str) -> Option<IpAddr> {
    let ip = literal.parse::<IpAddr>().ok().or_else(|| {
        literal
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .and_then(|inner| inner.parse::<std::net::Ipv6Addr>().ok())
            .map(IpAddr::V6)
    })?;

    // IPv4-mapped IPv6 addresses are carried as plain IPv4.
    Some(match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        v4 => v4,
    })
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Ip(ip) => write!(f, "{}", ip),
            Endpoint::Domain(text) | Endpoint::Url(text) => f.write_str(text),
        }
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}
