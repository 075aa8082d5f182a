// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation of issue lists into dashboard statistics.
//!
//! Everything here is a pure function over issues already loaded from the
//! store. Callers pass `now` so results are reproducible.

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::issue::{Issue, Priority, Status};

/// Key used for issues without a department.
pub const UNASSIGNED_KEY: &str = "unassigned";

/// Key used for issues whose address has no usable first segment.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Parameters for [`summarize`].
#[derive(Debug, Clone)]
pub struct Options {
    pub now: DateTime<Utc>,
    /// Length of the current and previous comparison windows.
    pub window_days: u32,
    /// Number of calendar days in the daily trend, today included.
    pub trend_days: u32,
    /// Named areas matched against addresses. Empty groups by address prefix.
    pub areas: Vec<String>,
}

impl Options {
    pub fn new(now: DateTime<Utc>) -> Self {
        Options {
            now,
            window_days: 7,
            trend_days: 7,
            areas: Vec::new(),
        }
    }
}

/// Count for one group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub key: String,
    pub count: usize,
}

/// A metric compared across two adjacent windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub current: usize,
    pub previous: usize,
    /// Whole-percent change from previous to current.
    pub change: i64,
}

impl Delta {
    pub fn new(current: usize, previous: usize) -> Self {
        Delta {
            current,
            previous,
            change: percent_change(current, previous),
        }
    }
}

/// Reported and resolved counts for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub reported: usize,
    pub resolved: usize,
}

/// Aggregated statistics over a set of issues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Whole-percent share of resolved issues.
    pub resolution_rate: u32,
    /// Mean hours from report to resolution, over resolved issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resolution_hours: Option<f64>,
    pub window_days: u32,
    pub reported_window: Delta,
    pub resolved_window: Delta,
    pub by_status: Vec<Count>,
    pub by_priority: Vec<Count>,
    pub by_category: Vec<Count>,
    pub by_department: Vec<Count>,
    pub by_location: Vec<Count>,
    pub trend: Vec<Day>,
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
pub fn resolution_rate(resolved: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (resolved as f64 / total as f64 * 100.0).round() as u32
}

/// Percent change between windows.
///
/// A previous value of zero yields 100 when the current value is positive
/// and 0 otherwise.
pub fn percent_change(current: usize, previous: usize) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    ((current as f64 - previous as f64) / previous as f64 * 100.0).round() as i64
}

/// Group keys into counts sorted by count descending, then key ascending.
pub fn count_by<I>(keys: I) -> Vec<Count>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    sorted(counts.into_iter())
}

fn sorted(counts: impl Iterator<Item = (String, usize)>) -> Vec<Count> {
    let mut out: Vec<Count> = counts.map(|(key, count)| Count { key, count }).collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    out
}

/// Location key for an address: its first comma-separated segment.
pub fn location_key(address: &str) -> String {
    let segment = address.split(',').next().unwrap_or("").trim();
    if segment.is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        segment.to_string()
    }
}

/// Count issues per location.
///
/// With configured areas, each area counts issues whose address contains it,
/// ignoring case. Without areas, issues group by [`location_key`].
pub fn by_location(issues: &[Issue], areas: &[String]) -> Vec<Count> {
    if areas.is_empty() {
        return count_by(issues.iter().map(|i| location_key(&i.address)));
    }
    let counts = areas.iter().map(|area| {
        let needle = area.to_lowercase();
        let n = issues
            .iter()
            .filter(|i| i.address.to_lowercase().contains(&needle))
            .count();
        (area.clone(), n)
    });
    sorted(counts)
}

/// Counts for every status, including zeros.
fn by_status(issues: &[Issue]) -> Vec<Count> {
    sorted(Status::ALL.iter().map(|s| {
        let n = issues.iter().filter(|i| i.status == *s).count();
        (s.as_str().to_string(), n)
    }))
}

/// Counts for every priority, including zeros.
fn by_priority(issues: &[Issue]) -> Vec<Count> {
    sorted(Priority::ALL.iter().map(|p| {
        let n = issues.iter().filter(|i| i.priority == *p).count();
        (p.as_str().to_string(), n)
    }))
}

/// Daily reported/resolved counts for the last `days` days, oldest first.
pub fn trend(issues: &[Issue], now: DateTime<Utc>, days: u32) -> Vec<Day> {
    let today = now.date_naive();
    (0..u64::from(days))
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| Day {
            date,
            reported: issues
                .iter()
                .filter(|i| i.created_at.date_naive() == date)
                .count(),
            resolved: issues
                .iter()
                .filter(|i| i.resolved_at.is_some_and(|t| t.date_naive() == date))
                .count(),
        })
        .collect()
}

/// Mean hours from creation to resolution.
pub fn average_resolution_hours(issues: &[Issue]) -> Option<f64> {
    let hours: Vec<f64> = issues
        .iter()
        .filter_map(|i| i.resolved_at.map(|t| (t - i.created_at).num_seconds() as f64 / 3600.0))
        .collect();
    if hours.is_empty() {
        return None;
    }
    Some(hours.iter().sum::<f64>() / hours.len() as f64)
}

/// Compare a timestamp metric across the current and previous windows.
fn window_delta<F>(issues: &[Issue], now: DateTime<Utc>, days: u32, at: F) -> Delta
where
    F: Fn(&Issue) -> Option<DateTime<Utc>>,
{
    let span = Duration::days(i64::from(days));
    let current_start = now.checked_sub_signed(span).unwrap_or(DateTime::<Utc>::MIN_UTC);
    let previous_start = current_start
        .checked_sub_signed(span)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut current = 0;
    let mut previous = 0;
    for t in issues.iter().filter_map(at) {
        if t > current_start && t <= now {
            current += 1;
        } else if t > previous_start && t <= current_start {
            previous += 1;
        }
    }
    Delta::new(current, previous)
}

/// Aggregate issues into a [`Summary`].
pub fn summarize(issues: &[Issue], options: &Options) -> Summary {
    let count_status = |s: Status| issues.iter().filter(|i| i.status == s).count();
    let resolved = count_status(Status::Resolved);

    Summary {
        total: issues.len(),
        open: count_status(Status::Open),
        in_progress: count_status(Status::InProgress),
        resolved,
        resolution_rate: resolution_rate(resolved, issues.len()),
        avg_resolution_hours: average_resolution_hours(issues),
        window_days: options.window_days,
        reported_window: window_delta(issues, options.now, options.window_days, |i| {
            Some(i.created_at)
        }),
        resolved_window: window_delta(issues, options.now, options.window_days, |i| {
            i.resolved_at
        }),
        by_status: by_status(issues),
        by_priority: by_priority(issues),
        by_category: count_by(issues.iter().map(|i| i.category.to_lowercase())),
        by_department: count_by(issues.iter().map(|i| {
            i.department
                .clone()
                .unwrap_or_else(|| UNASSIGNED_KEY.to_string())
        })),
        by_location: by_location(issues, &options.areas),
        trend: trend(issues, options.now, options.trend_days),
    }
}

#[cfg(test)]
#[path = "analytics_tests.rs"]
mod tests;
