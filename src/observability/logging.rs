//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - The subscriber is installed before any document is decoded, so decoder
//!   events (dropped transport tokens, `env:` lookups) are visible
//! - Level precedence: command line, then `RUST_LOG`, then the document's
//!   `log.logLevel`, then `info`
//! - The filter sits behind a reload layer so the document's level can be
//!   applied once it has been read

use tracing::Subscriber;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

pub const DEFAULT_LEVEL: &str = "info";

/// Filter enabling `level` for this crate and its binary.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("proxy_conf={level},conf_check={level}"))
}

/// Handle to the installed filter.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogHandle {
    /// Switch to the document's level unless the command line or `RUST_LOG`
    /// already chose one. Returns whether the filter changed.
    pub fn apply_document_level(&self, level: &str) -> Result<bool, reload::Error> {
        if self.pinned {
            return Ok(false);
        }
        self.handle.reload(level_filter(level))?;
        Ok(true)
    }
}

/// Builds a subscriber around `filter` without installing it.
pub fn subscriber(
    filter: EnvFilter,
    pinned: bool,
) -> (impl Subscriber + Send + Sync + 'static, LogHandle) {
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    (subscriber, LogHandle { handle, pinned })
}

/// Install the global subscriber. Later calls leave the first one in place.
pub fn init_logging(cli_level: Option<&str>) -> LogHandle {
    let from_env = EnvFilter::try_from_default_env().ok();
    let pinned = cli_level.is_some() || from_env.is_some();

    let filter = match (cli_level, from_env) {
        (Some(level), _) => level_filter(level),
        (None, Some(filter)) => filter,
        (None, None) => level_filter(DEFAULT_LEVEL),
    };

    let (subscriber, handle) = subscriber(filter, pinned);
    let _ = subscriber.try_init();
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_document_level_applies_after_load() {
        let (subscriber, handle) = subscriber(level_filter("info"), false);

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));

            assert!(handle.apply_document_level("debug").unwrap());
            assert!(tracing::enabled!(Level::DEBUG));
        });
    }

    #[test]
    fn test_pinned_level_ignores_document() {
        let (subscriber, handle) = subscriber(level_filter("trace"), true);

        tracing::subscriber::with_default(subscriber, || {
            assert!(!handle.apply_document_level("error").unwrap());
            assert!(tracing::enabled!(Level::TRACE));
        });
    }

    #[test]
    fn test_decoder_events_reach_installed_filter() {
        let (subscriber, _handle) = subscriber(level_filter("debug"), true);

        tracing::subscriber::with_default(subscriber, || {
            // The transport decoder logs dropped tokens at debug under this crate's target.
            assert!(tracing::enabled!(target: "proxy_conf::conf::transport", Level::DEBUG));
            assert!(!tracing::enabled!(target: "proxy_conf::conf::transport", Level::TRACE));
        });
    }
}
