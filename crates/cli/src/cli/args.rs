// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These are used with `#[command(flatten)]` by commands that share the
//! issue filter vocabulary (`list` and `stats`).

use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::Args;
use ward_core::filter::parse_time_bound;
use ward_core::IssueFilter;

use crate::error::Result;

/// Issue filter arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Filter by status (comma-separated for OR, repeat for AND)
    #[arg(long, short)]
    pub status: Vec<String>,

    /// Filter by priority (comma-separated for OR, repeat for AND)
    #[arg(long, short)]
    pub priority: Vec<String>,

    /// Filter by category (comma-separated for OR, repeat for AND)
    #[arg(long, short)]
    pub category: Vec<String>,

    /// Filter by department (comma-separated for OR, repeat for AND)
    #[arg(long, short)]
    pub department: Vec<String>,

    /// Show only issues without a department
    #[arg(long, conflicts_with = "department")]
    pub unassigned: bool,

    /// Text in id, title, description or address (case-insensitive)
    #[arg(long, short = 'q', value_name = "TEXT")]
    pub search: Option<String>,

    /// Address contains TEXT (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub near: Option<String>,

    /// Reported on or after a date (2026-01-31) or within a duration (3d, 2w, 12h)
    #[arg(long, value_name = "WHEN")]
    pub since: Option<String>,

    /// Reported before a duration ago, or on or before a date
    #[arg(long, value_name = "WHEN")]
    pub until: Option<String>,
}

impl FilterArgs {
    /// Build the core filter, resolving relative time bounds against `now`.
    pub fn to_filter(&self, now: DateTime<Utc>) -> Result<IssueFilter> {
        let mut filter = IssueFilter {
            unassigned: self.unassigned,
            ..IssueFilter::default()
        }
        .with_statuses(&self.status)?
        .with_priorities(&self.priority)?
        .with_categories(&self.category)?
        .with_departments(&self.department)?
        .with_search(self.search.as_deref())
        .with_near(self.near.as_deref());

        if let Some(since) = &self.since {
            filter.since = Some(parse_time_bound(since, now)?);
        }
        if let Some(until) = &self.until {
            let bound = parse_time_bound(until, now)?;
            // A date bound includes the whole day.
            let whole_day = NaiveDate::parse_from_str(until.trim(), "%Y-%m-%d").is_ok();
            filter.until = Some(match bound.checked_add_signed(Duration::days(1)) {
                Some(end) if whole_day => end,
                _ => bound,
            });
        }
        Ok(filter)
    }
}

/// Limit arguments for paginated results.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'n', long, conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Show all results
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,
}

impl LimitArgs {
    /// The effective limit given a command's default.
    pub fn resolve(&self, default: usize) -> Option<usize> {
        if self.no_limit {
            None
        } else {
            Some(self.limit.unwrap_or(default))
        }
    }
}
