use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use crate::config::{Config, Verbosity};

/// Install the global `tracing` subscriber with the default [`Config`].
pub fn init() {
    init_with(&Config::default());
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over [`Config::log_filter`]. Calling this more than once is
/// harmless; later calls keep the subscriber that was installed first.
pub fn init_with(config: &Config) {
    let filter = match config.verbosity {
        Verbosity::Quiet => EnvFilter::new("warn"),
        _ => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str())),
    };

    let span_events = match config.verbosity {
        Verbosity::Verbose => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.log_targets)
        .with_span_events(span_events)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
