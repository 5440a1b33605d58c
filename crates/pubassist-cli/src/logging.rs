//! Tracing subscriber for the `pubassist` binary.
//!
//! Filter priority, highest first:
//! 1. `PUBASSIST_LOG` (directives, e.g. `pubassist_runtime=debug,warn`)
//! 2. `RUST_LOG`
//! 3. `--log-level`

use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "PUBASSIST_LOG";

/// Install the global subscriber writing to stderr.
///
/// A second call is a no-op.
pub fn init(level: LogLevel) {
    let filter = build_env_filter(level);
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(level.to_string())
}
