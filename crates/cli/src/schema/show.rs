// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `ward show` JSON output.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use super::{Event, Note, Priority, Status};

/// Full issue details including notes and events.
#[derive(JsonSchema, Serialize)]
pub struct IssueDetails {
    /// Unique issue identifier.
    pub id: String,
    /// Short summary given by the reporter.
    pub title: String,
    /// Longer description from the reporter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current workflow state.
    pub status: Status,
    /// Urgency of the issue.
    pub priority: Priority,
    /// Lower-cased category.
    pub category: String,
    /// Street address, possibly empty.
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// User id of the reporter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    /// Department responsible for the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// When the issue was reported.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// When the issue was last resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Admin notes, oldest first.
    pub notes: Vec<Note>,
    /// Event history, oldest first.
    pub events: Vec<Event>,
}
