//! Lenient field decoders.
//!
//! # Data Flow
//! ```text
//! serde_json::Value (one field of a config document)
//!     → <Type>::decode (dispatch on JSON kind, validate once)
//!     → immutable value object
//!     → build() → net / protocol runtime value
//! ```
//!
//! # Design Decisions
//! - Every type also implements `Deserialize`, so schema structs can use
//!   them as plain fields; decode errors become serde custom errors there
//! - Decoders hold no state and never cache
//! - The only silent recovery is dropping unknown tokens in a
//!   `TransportList`

pub mod address;
pub mod error;
pub mod port;
pub mod string_list;
pub mod transport;
pub mod user;

pub use address::Endpoint;
pub use error::{DecodeError, DecodeResult};
pub use port::{PortList, PortRange};
pub use string_list::StringList;
pub use transport::{Transport, TransportList};
pub use user::Credential;
