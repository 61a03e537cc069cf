//! Shared fixtures for integration tests.

use std::collections::HashMap;

/// A complete document touching every decoder.
pub const FULL_DOCUMENT: &str = r#"{
    "log": { "logLevel": "debug" },
    "inbounds": [
        {
            "tag": "vless-in",
            "protocol": "vless",
            "listen": "::",
            "port": "443, 8443-8450",
            "network": "TCP, ip",
            "clients": [
                {
                    "id": "96edb838-6d68-42ef-a933-25f7ac3a9d09",
                    "email": "love@example.com",
                    "level": 1,
                    "alterId": 100
                }
            ]
        }
    ],
    "outbounds": [
        {
            "tag": "upstream",
            "protocol": "vmess",
            "servers": [
                { "address": "proxy.example.com", "port": "1234", "network": "udp" },
                { "address": "8.8.8.8", "port": 53 }
            ]
        }
    ],
    "dns": {
        "servers": [
            "https://dns.google/dns-query",
            "https+local://dns.google/dns-query",
            "1.1.1.1",
            "localhost"
        ],
        "hosts": {
            "example.com": "127.0.0.1,::1",
            "internal.lan": ["10.0.0.1", "10.0.0.2"]
        }
    }
}"#;

/// Environment lookup backed by a fixed map.
#[allow(dead_code)]
pub fn fake_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}
