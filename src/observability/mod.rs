//! Observability subsystem.
//!
//! Decoders emit `tracing` events (`trace!` for disambiguation and
//! environment lookups, `debug!` for dropped transport tokens); binaries
//! install the subscriber through [`logging::init_logging`].

pub mod logging;
