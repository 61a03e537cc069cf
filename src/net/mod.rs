//! Runtime network values.
//!
//! # Data Flow
//! ```text
//! JSON field
//!     → conf::* decoder (shape dispatch, validation)
//!     → build()
//!     → net::Address / net::PortRange / net::NetworkSet
//!     → consumed by the routing engine
//! ```
//!
//! # Design Decisions
//! - Values here are already valid; constructors do not re-check them
//! - Domain and URL text share `Address::Domain`
//! - Transport sets are bitsets, membership is a single AND

pub mod address;
pub mod network;
pub mod port;

pub use address::Address;
pub use network::{Network, NetworkSet};
pub use port::{Port, PortList, PortRange};
