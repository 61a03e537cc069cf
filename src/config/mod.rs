//! Configuration documents.
//!
//! # Data Flow
//! ```text
//! JSON document
//!     → loader.rs (read & deserialize)
//!     → schema.rs structs, each polymorphic field decoded by conf::*
//!     → ConfConfig (validated, immutable)
//!     → build() per fragment → runtime values
//! ```
//!
//! # Design Decisions
//! - Validation happens once, while deserializing; nothing re-checks later
//! - Loading is fail-fast: the first bad field rejects the document
//! - Unset sections fall back to defaults so minimal documents work

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_str, ConfigError};
pub use schema::ConfConfig;
pub use schema::{DnsConfig, InboundConfig, OutboundConfig, ServerConfig};
