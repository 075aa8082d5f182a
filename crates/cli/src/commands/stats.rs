// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use tracing::debug;
use ward_core::analytics::{summarize, Options, Summary};
use ward_core::Database;

use crate::cli::{FilterArgs, OutputFormat};
use crate::config::Config;
use crate::display::format_summary;
use crate::error::{Error, Result};

use super::open_db;

/// Command-line overrides for the analytics defaults in config.
#[derive(Debug, Clone, Default)]
pub struct StatsOverrides {
    pub window_days: Option<u32>,
    pub trend_days: Option<u32>,
    pub areas: Vec<String>,
}

pub fn run(
    filters: &FilterArgs,
    overrides: StatsOverrides,
    output: OutputFormat,
) -> Result<()> {
    let (db, config, _) = open_db()?;
    run_impl(&db, &config, filters, overrides, output, Utc::now()).map(|_| ())
}

/// Longest window or trend accepted, in days.
pub const MAX_DAYS: u32 = 3650;

fn check_days(field: &'static str, days: u32) -> Result<u32> {
    if days > MAX_DAYS {
        return Err(Error::InvalidValue {
            field,
            reason: format!("{days} days is too long\n  hint: use at most {MAX_DAYS} days"),
        });
    }
    Ok(days.max(1))
}

/// Merge config defaults with overrides. Areas given on the command line
/// replace the configured list.
pub(crate) fn options(
    config: &Config,
    overrides: StatsOverrides,
    now: DateTime<Utc>,
) -> Result<Options> {
    let areas = if overrides.areas.is_empty() {
        config.analytics.areas.clone()
    } else {
        overrides.areas
    };
    Ok(Options {
        now,
        window_days: check_days(
            "window",
            overrides.window_days.unwrap_or(config.analytics.window_days),
        )?,
        trend_days: check_days(
            "trend",
            overrides.trend_days.unwrap_or(config.analytics.trend_days),
        )?,
        areas: areas
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect(),
    })
}

pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    filters: &FilterArgs,
    overrides: StatsOverrides,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> Result<Summary> {
    let filter = filters.to_filter(now)?;
    let issues = filter.apply(db.list_issues()?);
    let options = options(config, overrides, now)?;
    debug!(
        issues = issues.len(),
        window = options.window_days,
        trend = options.trend_days,
        "summarizing"
    );
    let summary = crate::time_phase!("analytics", { summarize(&issues, &options) });

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text | OutputFormat::Id => println!("{}", format_summary(&summary)),
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
