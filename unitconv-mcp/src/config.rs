//! Server configuration from the environment

use std::env;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `tracing` filter directive, e.g. "info" or "unitconv_units=debug"
    pub log_filter: String,
    /// Colored log output. Off by default since stderr is usually captured.
    pub log_ansi: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. `UNITCONV_LOG` wins over `RUST_LOG`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("UNITCONV_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_ansi = lookup("UNITCONV_LOG_ANSI")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Config { log_filter, log_ansi }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: false,
        }
    }
}

/// Install the global subscriber. Logs go to stderr; stdout carries the protocol.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.log_ansi)
        .init();
}
