// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `ward stats` JSON output.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

/// A labelled count.
#[derive(JsonSchema, Serialize)]
pub struct Count {
    pub key: String,
    pub count: usize,
}

/// Current window compared to the window before it.
#[derive(JsonSchema, Serialize)]
pub struct Delta {
    pub current: usize,
    pub previous: usize,
    /// Percent change; 100 when the previous window was empty and the current is not.
    pub change: i64,
}

/// Issues reported and resolved on one day.
#[derive(JsonSchema, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub reported: usize,
    pub resolved: usize,
}

/// JSON output structure for the stats command.
#[derive(JsonSchema, Serialize)]
pub struct StatsOutputJson {
    /// Issues matching the filters.
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Resolved issues as a percentage of the total, rounded.
    pub resolution_rate: u32,
    /// Mean hours from report to resolution over resolved issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_resolution_hours: Option<f64>,
    /// Length of the comparison windows in days.
    pub window_days: u32,
    pub reported_window: Delta,
    pub resolved_window: Delta,
    pub by_status: Vec<Count>,
    pub by_priority: Vec<Count>,
    pub by_category: Vec<Count>,
    pub by_department: Vec<Count>,
    pub by_location: Vec<Count>,
    /// One entry per day, oldest first.
    pub trend: Vec<Day>,
}
