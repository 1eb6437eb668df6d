//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the embedding application through [`init_logging`].

use tracing_subscriber::EnvFilter;
use crate::core::config::LoggingConfig;
use crate::core::error::{Error, ErrorKind, Result};

/// Install a global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured filter.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("bad log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.with_target)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal, format!("logging already initialised: {}", e)))
}

/// Subscriber for tests; safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jyutsearch=debug")),
        )
        .with_test_writer()
        .try_init();
}
