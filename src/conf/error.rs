//! Decode error definitions.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while decoding a configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The JSON value is not of the kind the field accepts.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A string matched none of the accepted grammars.
    #[error("invalid syntax: {0:?}")]
    SyntaxError(String),

    /// A transport token outside the known vocabulary.
    #[error("unknown transport: {0:?}")]
    UnknownTransport(String),

    /// A port bound outside [1, 65535].
    #[error("port {0} out of range [1, 65535]")]
    PortOutOfRange(String),

    /// A range whose lower bound exceeds its upper bound.
    #[error("invalid port range: {from} > {to}")]
    InvalidRange { from: u16, to: u16 },

    /// `env:NAME` referenced a variable that is not set.
    #[error("environment variable {0} is not set")]
    EnvVarMissing(String),

    /// `env:NAME` resolved to a value that is not an integer.
    #[error("environment variable {name} has non-integer value {value:?}")]
    EnvVarInvalid { name: String, value: String },
}

/// Result type for field decoders.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    pub(crate) fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        DecodeError::TypeMismatch {
            expected,
            found: kind_of(found),
        }
    }
}

/// Human-readable name of a JSON value's kind.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
