//! Comma-delimited string lists.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::ops::Deref;

use super::error::{DecodeError, DecodeResult};

/// An ordered list of strings written either as `"a,b,c"` or `["a","b","c"]`.
///
/// Splitting a string does not trim: `"a, b"` yields `["a", " b"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringList(Vec<String>);

impl StringList {
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::String(s) => Ok(Self(s.split(',').map(str::to_string).collect())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(DecodeError::type_mismatch("string", other)),
                })
                .collect::<DecodeResult<Vec<_>>>()
                .map(Self),
            other => Err(DecodeError::type_mismatch("string or array of strings", other)),
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for StringList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}
