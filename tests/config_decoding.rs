//! End-to-end decoding of configuration documents.

mod common;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use proxy_conf::conf::{DecodeError, Endpoint, PortList, PortRange};
use proxy_conf::config::{load_str, ConfigError};
use proxy_conf::net::{Address, Network, Port};
use proxy_conf::protocol::User;
use serde_json::json;

use common::{fake_env, FULL_DOCUMENT};

#[test]
fn test_full_document_decodes() {
    let config = load_str(FULL_DOCUMENT).unwrap();
    assert_eq!(config.log.log_level, "debug");

    let inbound = config.inbounds[0].build();
    assert_eq!(inbound.listen, Some(Address::Ip(IpAddr::V6(Ipv6Addr::UNSPECIFIED))));
    assert!(inbound.ports.contains(Port(443)));
    assert!(inbound.ports.contains(Port(8450)));
    assert!(!inbound.ports.contains(Port(8451)));
    assert!(inbound.networks.has(Network::Tcp));
    assert!(!inbound.networks.has(Network::Udp));
    assert_eq!(inbound.users, vec![User::new(1, "love@example.com")]);
    assert_eq!(config.inbounds[0].clients[0].legacy_alter_id, 100);

    let outbound = config.outbounds[0].build();
    assert_eq!(outbound.servers[0].network, Network::Udp);
    assert_eq!(outbound.servers[0].port.from, Port(1234));
    assert_eq!(
        outbound.servers[1].address,
        Address::Ip(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)))
    );
    assert_eq!(outbound.servers[1].network, Network::Tcp);
}

#[test]
fn test_dns_servers_keep_url_literals() {
    let config = load_str(FULL_DOCUMENT).unwrap();
    let servers = &config.dns.servers;

    assert!(matches!(servers[0], Endpoint::Url(_)));
    assert_eq!(servers[0].domain(), Some("https://dns.google/dns-query"));
    assert_eq!(servers[1].domain(), Some("https+local://dns.google/dns-query"));
    assert!(matches!(servers[2], Endpoint::Ip(_)));
    assert_eq!(servers[3], Endpoint::Domain("localhost".to_string()));

    let hosts = &config.dns.hosts;
    assert_eq!(&*hosts["example.com"], &["127.0.0.1", "::1"]);
    assert_eq!(&*hosts["internal.lan"], &["10.0.0.1", "10.0.0.2"]);
}

#[test]
fn test_first_bad_field_rejects_document() {
    let documents = [
        (r#"{"inbounds": [{"protocol": "socks", "port": 70000}]}"#, "out of range"),
        (r#"{"inbounds": [{"protocol": "socks", "port": 80, "network": 0}]}"#, "type mismatch"),
        (
            r#"{"outbounds": [{"protocol": "vmess", "servers": [{"address": 1234, "port": 80}]}]}"#,
            "type mismatch",
        ),
        (
            r#"{"inbounds": [{"protocol": "vmess", "port": 80, "clients": [{"email": 1234}]}]}"#,
            "expected string",
        ),
        (r#"{"dns": {"hosts": {"a": 1}}}"#, "type mismatch"),
    ];

    for (doc, needle) in documents {
        match load_str(doc) {
            Err(ConfigError::Parse(e)) => {
                assert!(e.to_string().contains(needle), "{doc}: {e}");
            }
            other => panic!("{doc}: expected parse error, got {other:?}"),
        }
    }
}

#[test]
fn test_env_indirection_is_read_per_decode() {
    let value = json!("env:PROXY_PORT");

    let first = PortRange::decode_with_env(&value, fake_env(&[("PROXY_PORT", "1234")]));
    let second = PortRange::decode_with_env(&value, fake_env(&[("PROXY_PORT", "4321")]));
    assert_eq!(first.unwrap().from(), 1234);
    assert_eq!(second.unwrap().from(), 4321);

    assert_eq!(
        PortRange::decode_with_env(&value, fake_env(&[])),
        Err(DecodeError::EnvVarMissing("PROXY_PORT".to_string()))
    );
}

#[test]
fn test_port_list_with_env_entry() {
    let env = fake_env(&[("ALT_PORT", "8080")]);
    let list = PortList::decode_with_env(&json!("80, env:ALT_PORT"), &env).unwrap();
    let built = list.build();
    assert!(built.contains(Port(80)));
    assert!(built.contains(Port(8080)));
    assert!(!built.contains(Port(81)));
}

#[test]
fn test_normalized_output_round_trips() {
    let config = load_str(FULL_DOCUMENT).unwrap();
    let normalized = serde_json::to_string(&config).unwrap();
    let again = load_str(&normalized).unwrap();

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        serde_json::to_value(&again).unwrap()
    );
    assert_eq!(
        serde_json::to_value(&config.inbounds[0].network).unwrap(),
        json!(["tcp"])
    );
}
