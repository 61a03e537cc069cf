//! Lenient configuration decoding for a proxy runtime.
//!
//! Turns human-written JSON fields (ports, endpoints, transport sets, user
//! entries) into validated values, and builds those into the runtime types
//! in [`net`] and [`protocol`].

pub mod conf;
pub mod config;
pub mod net;
pub mod observability;
pub mod protocol;

pub use conf::DecodeError;
pub use config::schema::ConfConfig;
