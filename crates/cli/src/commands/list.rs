// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use tracing::debug;
use ward_core::{Database, Issue, Status};

use crate::cli::{FilterArgs, LimitArgs, OutputFormat};
use crate::display::format_issue_line;
use crate::error::Result;
use crate::schema::list::ListOutputJson;
use crate::schema::IssueJson;

use super::open_db;

/// Default number of issues shown without `--limit`.
pub const DEFAULT_LIMIT: usize = 100;

pub fn run(
    filters: &FilterArgs,
    limits: &LimitArgs,
    all: bool,
    output: OutputFormat,
) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, filters, limits.resolve(DEFAULT_LIMIT), all, output, Utc::now())
}

/// Select, sort and truncate issues for display.
///
/// Resolved issues are hidden unless `all` is set or a status filter is given.
pub(crate) fn select(
    db: &Database,
    filters: &FilterArgs,
    all: bool,
    now: DateTime<Utc>,
) -> Result<Vec<Issue>> {
    let filter = filters.to_filter(now)?;
    let mut issues = filter.apply(db.list_issues()?);
    if !all && !filter.has_status() {
        issues.retain(|i| i.status != Status::Resolved);
    }
    // Priority descending, then newest first
    issues.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    debug!(matched = issues.len(), "selected issues");
    Ok(issues)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    filters: &FilterArgs,
    limit: Option<usize>,
    all: bool,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> Result<()> {
    let mut issues = select(db, filters, all, now)?;
    let total = issues.len();
    if let Some(n) = limit {
        issues.truncate(n);
    }

    match output {
        OutputFormat::Text => {
            for issue in &issues {
                println!("{}", format_issue_line(issue));
            }
            if issues.len() < total {
                println!("({} of {} shown, use --no-limit to see all)", issues.len(), total);
            }
        }
        OutputFormat::Id => {
            for issue in &issues {
                println!("{}", issue.id);
            }
        }
        OutputFormat::Json => {
            let output = ListOutputJson {
                issues: issues.iter().map(IssueJson::from).collect(),
                total,
                limit,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
