//! Port range decoding.
//!
//! # Accepted forms
//! - `1234` (JSON integer)
//! - `"1234"`
//! - `"1000-2000"`
//! - `"env:NAME"`, resolved at decode time and parsed as a single port
//!
//! Bounds are checked to lie in [1, 65535] and `from <= to`, whatever form
//! produced them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

use super::error::{DecodeError, DecodeResult};
use crate::net;

const ENV_PREFIX: &str = "env:";

/// Looks a variable up in the process environment.
///
/// Values that are not valid unicode are converted lossily, so they surface
/// as `EnvVarInvalid` instead of `EnvVarMissing`.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

/// A validated inclusive port range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    from: u16,
    to: u16,
}

impl PortRange {
    /// Checks `1 <= from <= to`.
    pub fn new(from: u16, to: u16) -> DecodeResult<Self> {
        if from == 0 {
            return Err(DecodeError::PortOutOfRange(from.to_string()));
        }
        if to == 0 {
            return Err(DecodeError::PortOutOfRange(to.to_string()));
        }
        if from > to {
            return Err(DecodeError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn single(port: u16) -> DecodeResult<Self> {
        Self::new(port, port)
    }

    pub fn from(&self) -> u16 {
        self.from
    }

    pub fn to(&self) -> u16 {
        self.to
    }

    /// Decodes against the process environment.
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        Self::decode_with_env(value, process_env)
    }

    /// Decodes with `env` answering `env:NAME` lookups.
    pub fn decode_with_env<F>(value: &Value, env: F) -> DecodeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match value {
            Value::Number(n) => Self::single(integer_port(n)?),
            Value::String(s) => parse_port_spec(s, &env),
            other => Err(DecodeError::SyntaxError(other.to_string())),
        }
    }

    pub fn build(&self) -> net::PortRange {
        net::PortRange {
            from: net::Port(self.from),
            to: net::Port(self.to),
        }
    }
}

fn integer_port(n: &Number) -> DecodeResult<u16> {
    if let Some(i) = n.as_i64() {
        return check_bound(i, || n.to_string());
    }
    if n.is_u64() {
        return Err(DecodeError::PortOutOfRange(n.to_string()));
    }
    Err(DecodeError::SyntaxError(n.to_string()))
}

fn check_bound(value: i64, text: impl FnOnce() -> String) -> DecodeResult<u16> {
    match u16::try_from(value) {
        Ok(port) if port >= 1 => Ok(port),
        _ => Err(DecodeError::PortOutOfRange(text())),
    }
}

/// A decimal bound inside a port string: digits only, no sign, no spaces.
fn string_bound(text: &str, spec: &str) -> DecodeResult<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::SyntaxError(spec.to_string()));
    }
    // Too many digits for i64 is still just out of range.
    let value = text.parse::<i64>().unwrap_or(i64::MAX);
    check_bound(value, || text.to_string())
}

fn parse_port_spec<F>(spec: &str, env: &F) -> DecodeResult<PortRange>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = spec.strip_prefix(ENV_PREFIX) {
        let raw = env(name).ok_or_else(|| DecodeError::EnvVarMissing(name.to_string()))?;
        tracing::trace!(name, value = %raw, "resolved port from environment");
        let value = raw.parse::<i64>().map_err(|_| DecodeError::EnvVarInvalid {
            name: name.to_string(),
            value: raw.clone(),
        })?;
        return PortRange::single(check_bound(value, || raw.clone())?);
    }

    match spec.split_once('-') {
        None => PortRange::single(string_bound(spec, spec)?),
        Some((from, to)) => {
            let from = string_bound(from, spec)?;
            let to = string_bound(to, spec)?;
            PortRange::new(from, to)
        }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

impl Serialize for PortRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.from == self.to {
            serializer.serialize_u16(self.from)
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for PortRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

/// A union of port ranges: `443`, `"53,443,1000-2000"` or `[53, "1000-2000"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortList(Vec<PortRange>);

impl PortList {
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        Self::decode_with_env(value, process_env)
    }

    pub fn decode_with_env<F>(value: &Value, env: F) -> DecodeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ranges = match value {
            Value::Number(_) => vec![PortRange::decode_with_env(value, &env)?],
            Value::String(s) => s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| parse_port_spec(part, &env))
                .collect::<DecodeResult<Vec<_>>>()?,
            Value::Array(items) => items
                .iter()
                .map(|item| PortRange::decode_with_env(item, &env))
                .collect::<DecodeResult<Vec<_>>>()?,
            other => return Err(DecodeError::SyntaxError(other.to_string())),
        };
        Ok(Self(ranges))
    }

    pub fn ranges(&self) -> &[PortRange] {
        &self.0
    }

    pub fn build(&self) -> net::PortList {
        net::PortList {
            ranges: self.0.iter().map(PortRange::build).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for PortList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}
