//! Transport decoding.
//!
//! Two entry points with different failure behavior:
//! - [`Transport::decode`] is strict: an unknown token is an error.
//! - [`TransportList::decode`] is lenient: unknown tokens are dropped, so
//!   aliases written for newer runtimes do not break older ones.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashSet;

use super::error::{DecodeError, DecodeResult};
use crate::net::{Network, NetworkSet};

/// A single mandatory transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transport(Network);

impl Transport {
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        let token = match value {
            Value::String(s) => s,
            other => return Err(DecodeError::type_mismatch("string", other)),
        };
        Network::from_name(&token.to_lowercase())
            .map(Self)
            .ok_or_else(|| DecodeError::UnknownTransport(token.clone()))
    }

    pub fn build(&self) -> Network {
        self.0
    }
}

impl Serialize for Transport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for Transport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

/// A set of transports written as `["tcp","udp"]` or `"tcp, udp"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportList(HashSet<Network>);

impl TransportList {
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        let tokens: Vec<&str> = match value {
            Value::String(s) => s.split(',').collect(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.as_str()),
                    other => Err(DecodeError::type_mismatch("string", other)),
                })
                .collect::<DecodeResult<Vec<&str>>>()?,
            other => {
                return Err(DecodeError::type_mismatch(
                    "string or array of strings",
                    other,
                ))
            }
        };

        let mut set = HashSet::new();
        for token in tokens {
            match Network::from_name(&token.trim().to_lowercase()) {
                Some(network) => {
                    set.insert(network);
                }
                None => tracing::debug!(token, "ignoring unknown transport"),
            }
        }
        Ok(Self(set))
    }

    pub fn contains(&self, network: Network) -> bool {
        self.0.contains(&network)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn build(&self) -> NetworkSet {
        self.0.iter().copied().collect()
    }
}

impl Serialize for TransportList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.build().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TransportList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_transport() {
        let transport = Transport::decode(&json!("tcp")).unwrap();
        assert_eq!(transport.build(), Network::Tcp);

        let transport = Transport::decode(&json!("UDP")).unwrap();
        assert_eq!(transport.build(), Network::Udp);
    }

    #[test]
    fn test_single_transport_is_strict() {
        assert_eq!(
            Transport::decode(&json!("ip")),
            Err(DecodeError::UnknownTransport("ip".to_string()))
        );
        assert!(matches!(
            Transport::decode(&json!(6)),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_array_list() {
        let list = TransportList::decode(&json!(["Tcp"])).unwrap();
        let set = list.build();
        assert!(set.has(Network::Tcp));
        assert!(!set.has(Network::Udp));
    }

    #[test]
    fn test_string_list_ignores_unknown() {
        let list = TransportList::decode(&json!("TCP, ip")).unwrap();
        let set = list.build();
        assert!(set.has(Network::Tcp));
        assert!(!set.has(Network::Udp));
        assert!(!set.has(Network::Unix));
    }

    #[test]
    fn test_duplicates_collapse() {
        let list = TransportList::decode(&json!(["tcp", " TCP ", "udp"])).unwrap();
        assert!(list.contains(Network::Tcp));
        assert!(list.contains(Network::Udp));
        assert_eq!(list.build().networks(), vec![Network::Tcp, Network::Udp]);
    }

    #[test]
    fn test_all_unknown_is_empty() {
        let list = TransportList::decode(&json!("quic,ip")).unwrap();
        assert!(list.is_empty());
        assert!(list.build().is_empty());
    }

    #[test]
    fn test_list_rejects_other_shapes() {
        assert!(matches!(
            TransportList::decode(&json!(0)),
            Err(DecodeError::TypeMismatch { .. })
        ));
        assert!(matches!(
            TransportList::decode(&json!(["tcp", 1])),
            Err(DecodeError::TypeMismatch { .. })
        ));
        assert!(serde_json::from_str::<TransportList>("0").is_err());
    }

    #[test]
    fn test_list_serializes_canonically() {
        let list: TransportList = serde_json::from_str(r#""UDP,tcp""#).unwrap();
        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["tcp", "udp"]));
    }
}
