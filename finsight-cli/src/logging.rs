use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a filter directive that overrides the config
pub const LOG_ENV: &str = "FINSIGHT_LOG";

/// Initialise the global `tracing` subscriber.
///
/// `FINSIGHT_LOG` wins over `level`; an unparseable directive falls back
/// to `warn`. Output goes to stderr so stdout stays clean for reports.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
