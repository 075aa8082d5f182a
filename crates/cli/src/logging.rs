// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging on stderr.
//!
//! Command output goes to stdout; `tracing` events go to stderr filtered by
//! `WARD_LOG` (an `EnvFilter` directive such as `info` or `wardrs=debug`).

use tracing_subscriber::EnvFilter;

/// Filter used when `WARD_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from a directive, falling back to [`DEFAULT_FILTER`].
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    let filter = filter_from(crate::env::log_filter().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
