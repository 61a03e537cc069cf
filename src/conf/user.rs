//! User credential decoding.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::error::{DecodeError, DecodeResult};
use crate::protocol;

/// A configured user as written in the document.
///
/// `legacy_alter_id` is accepted for compatibility with older documents but
/// no current protocol uses it, so [`Credential::build`] drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub id: String,
    pub email: Option<String>,
    pub level: u32,
    #[serde(rename = "alterId")]
    pub legacy_alter_id: u32,
}

impl Credential {
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = match value {
            Value::Object(obj) => obj,
            other => return Err(DecodeError::type_mismatch("object", other)),
        };

        Ok(Self {
            id: string_field(obj, "id")?.unwrap_or_default(),
            email: string_field(obj, "email")?,
            level: uint_field(obj, "level")?.unwrap_or(0),
            legacy_alter_id: uint_field(obj, "alterId")?.unwrap_or(0),
        })
    }

    pub fn build(&self) -> protocol::User {
        protocol::User {
            level: self.level,
            email: self.email.clone().unwrap_or_default(),
        }
    }
}

// `null` counts as absent.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn string_field(obj: &Map<String, Value>, key: &str) -> DecodeResult<Option<String>> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(DecodeError::type_mismatch("string", other)),
    }
}

fn uint_field(obj: &Map<String, Value>, key: &str) -> DecodeResult<Option<u32>> {
    match present(obj, key) {
        None => Ok(None),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| DecodeError::type_mismatch("unsigned 32-bit integer", v)),
    }
}

impl<'de> Deserialize<'de> for Credential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}
