//! Tracing setup for the `pojistenci` binary.
//!
//! Events are written to stderr so they never mix with the menu on stdout.
//! `RUST_LOG` wins over the verbosity chosen on the command line.

use std::io;

use tracing_subscriber::EnvFilter;

/// How much the program logs when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors, so the menu stays readable.
    #[default]
    Normal,
    /// Session and registry events.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// The `EnvFilter` directive for this verbosity.
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "insured_registry=error",
            Self::Normal => "insured_registry=warn",
            Self::Verbose => "insured_registry=debug",
            Self::Trace => "insured_registry=trace",
        }
    }
}

fn filter(verbosity: Verbosity) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(verbosity.directive()),
    }
}

/// Install the global subscriber.
///
/// Calling this again is harmless: only the first subscriber is kept.
///
/// ```no_run
/// use insured_registry::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}

/// Route events to the test harness output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_parse() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Trace,
        ] {
            let directive = verbosity.directive();
            assert!(directive.starts_with("insured_registry="));
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }

    #[test]
    fn test_normal_is_default_and_warns() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
        assert_eq!(Verbosity::Normal.directive(), "insured_registry=warn");
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init_test_logging();
        init_logging(Verbosity::Trace);
        init_logging(Verbosity::Quiet);
    }
}
