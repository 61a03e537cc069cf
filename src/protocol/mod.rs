//! Protocol-level identities.

pub mod user;

pub use user::User;
