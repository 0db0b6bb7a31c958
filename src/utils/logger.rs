use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// The log level is read from `REGISTRY_LOG_LEVEL` (default `info`).
/// Safe to call multiple times; only the first call installs the subscriber,
/// so tests can invoke it freely.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = get_env_or_default("REGISTRY_LOG_LEVEL", Level::INFO);
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    });
}
