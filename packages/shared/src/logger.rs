//! Logging setup utilities for the GuessMe packages.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Every crate in `targets` gets `default_log_level`; the whole filter can be
/// overridden using the `RUST_LOG` environment variable. Output goes to
/// stderr so that it does not interleave with the terminal page on stdout.
///
/// # Arguments
///
/// * `targets` - Crate names to enable (e.g. `["guessme_client"]`)
/// * `default_log_level` - The default log level (e.g. "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use guessme_shared::logger::setup_logger;
///
/// setup_logger(&["guessme_client"], "info");
/// ```
pub fn setup_logger(targets: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(targets, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Logger initialized for {:?}", targets);
}

fn default_filter(targets: &[&str], default_log_level: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}
