//! User identity as consumed by inbound/outbound handlers.

use serde::Serialize;

/// A configured user.
///
/// Carries only what every protocol understands; protocol-specific account
/// data is attached by the handler that owns the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    /// Policy level.
    pub level: u32,
    /// Contact email, empty when not configured.
    pub email: String,
}

impl User {
    pub fn new(level: u32, email: impl Into<String>) -> Self {
        Self {
            level,
            email: email.into(),
        }
    }
}
