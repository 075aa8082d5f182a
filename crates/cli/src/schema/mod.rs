// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These are separate from runtime types to allow schema-specific annotations
//! and to keep schemars out of the core model.
//!
//! [`IssueJson`] is the issue summary emitted by `list`. The remaining types
//! exist to derive JSON Schema definitions for `show` and `stats`.

// Some variants are only constructed through schema generation
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

pub mod list;
pub mod show;
pub mod stats;

/// JSON representation of an issue summary.
#[derive(JsonSchema, Serialize)]
pub struct IssueJson {
    /// Unique issue identifier.
    pub id: String,
    /// Current workflow state.
    pub status: Status,
    /// Urgency of the issue.
    pub priority: Priority,
    /// Lower-cased category.
    pub category: String,
    /// Short summary given by the reporter.
    pub title: String,
    /// Street address, possibly empty.
    pub address: String,
    /// Department responsible for the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// When the issue was reported.
    pub created_at: DateTime<Utc>,
}

impl From<&ward_core::Issue> for IssueJson {
    fn from(issue: &ward_core::Issue) -> Self {
        IssueJson {
            id: issue.id.clone(),
            status: issue.status.into(),
            priority: issue.priority.into(),
            category: issue.category.clone(),
            title: issue.title.clone(),
            address: issue.address.clone(),
            department: issue.department.clone(),
            created_at: issue.created_at,
        }
    }
}

/// Workflow status of an issue.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    InProgress,
    Resolved,
}

impl From<ward_core::Status> for Status {
    fn from(value: ward_core::Status) -> Self {
        match value {
            ward_core::Status::Open => Status::Open,
            ward_core::Status::InProgress => Status::InProgress,
            ward_core::Status::Resolved => Status::Resolved,
        }
    }
}

/// Urgency of an issue.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl From<ward_core::Priority> for Priority {
    fn from(value: ward_core::Priority) -> Self {
        match value {
            ward_core::Priority::Low => Priority::Low,
            ward_core::Priority::Medium => Priority::Medium,
            ward_core::Priority::High => Priority::High,
            ward_core::Priority::Critical => Priority::Critical,
        }
    }
}

/// Types of actions that can be recorded in the event log.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Created,
    Edited,
    StatusChanged,
    Resolved,
    Reopened,
    Prioritized,
    Assigned,
    Unassigned,
    Noted,
}

/// An admin note attached to an issue.
#[derive(JsonSchema, Serialize)]
pub struct Note {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this note belongs to.
    pub issue_id: String,
    /// Issue status when the note was added.
    pub status: Status,
    /// The note text.
    pub content: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
}

/// An audit log entry recording a change to an issue.
#[derive(JsonSchema, Serialize)]
pub struct Event {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this event belongs to.
    pub issue_id: String,
    /// What type of change occurred.
    pub action: Action,
    /// Previous value (status, priority, department or field text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// New value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// Explanation given by the admin, or `auto: ...` for keyword assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
