//! Logging setup.
//!
//! Every crate in the workspace logs through `tracing` macros; this
//! module installs the subscriber that prints them.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above: logins, logouts, profile edits.
    #[default]
    Normal,
    /// Debug and above: guard and navigation decisions.
    Verbose,
    /// Everything, including storage reads and writes.
    Trace,
}

impl Verbosity {
    #[must_use]
    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn directive(&self) -> String {
        let level = self.to_level();
        [
            "roadwatch",
            "roadwatch_model",
            "roadwatch_storage",
            "roadwatch_session",
            "roadwatch_router",
        ]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG`, when set and valid, replaces the filter derived from
/// `verbosity`. Calling this more than once is harmless: later calls
/// leave the first subscriber in place.
///
/// ```no_run
/// use roadwatch::logging::{Verbosity, init_logging};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Minimal subscriber for tests: warnings and errors, captured per test.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
