//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global fmt subscriber filtered by `config.log_filter`.
///
/// An unparsable filter falls back to `info`. Returns false when a
/// subscriber was already installed, so calling this twice (tests,
/// embedding apps) is harmless.
pub fn init(config: &Config) -> bool {
    let (filter, fell_back) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if fell_back {
        tracing::warn!(
            "⚠️ logging::init: invalid log filter {:?}, using \"info\"",
            config.log_filter
        );
    }
    if installed {
        tracing::info!("📝 logging initialised: filter={}", config.log_filter);
    }
    installed
}
