// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for civic issue administration.
//!
//! This module contains the fundamental data types: Issue, Status, Priority,
//! Action, Event and Note.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Category assigned when a report carries none.
pub const DEFAULT_CATEGORY: &str = "other";

/// Workflow status of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Reported and waiting for triage. Initial state for new issues.
    Open,
    /// A department is working on it.
    InProgress,
    /// Fixed or otherwise dealt with.
    Resolved,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Resolved];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
        }
    }

    /// Any change to a different status is allowed.
    pub fn can_transition_to(&self, target: Status) -> bool {
        *self != target
    }

    /// Returns true for statuses that still need attention.
    pub fn is_active(&self) -> bool {
        !matches!(self, Status::Resolved)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in_progress" | "in-progress" | "in progress" | "inprogress" => {
                Ok(Status::InProgress)
            }
            "resolved" => Ok(Status::Resolved),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency of a reported issue.
///
/// Ordering follows urgency, so `Critical` compares greatest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities from least to most urgent.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "med" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A citizen-reported civic problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier (format: `{prefix}-{hash}`).
    pub id: String,
    /// Short summary given by the reporter.
    pub title: String,
    /// Longer free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current workflow state.
    #[serde(default = "default_status")]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Lower-cased category such as "pothole" or "garbage".
    #[serde(default = "default_category")]
    pub category: String,
    /// Free-text street address.
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// User id of the citizen who reported the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    /// Name of the department the issue is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// When the issue was reported.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// When the issue entered the resolved state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

fn default_status() -> Status {
    Status::Open
}

impl Issue {
    /// Creates a new open, unassigned issue.
    pub fn new(id: String, title: String, created_at: DateTime<Utc>) -> Self {
        Issue {
            id,
            title,
            description: None,
            status: Status::Open,
            priority: Priority::Medium,
            category: default_category(),
            address: String::new(),
            latitude: None,
            longitude: None,
            reporter: None,
            department: None,
            created_at,
            updated_at: created_at,
            resolved_at: None,
        }
    }

    /// Text the department matcher looks at: title, description and category.
    pub fn matcher_text(&self) -> String {
        let mut text = self.title.clone();
        if let Some(desc) = &self.description {
            text.push(' ');
            text.push_str(desc);
        }
        text.push(' ');
        text.push_str(&self.category);
        text
    }

    /// Returns the coordinates if both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Check that coordinates are given together and within WGS84 range.
pub fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<()> {
    match (latitude, longitude) {
        (None, None) => Ok(()),
        (Some(lat), Some(lng))
            if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) =>
        {
            Ok(())
        }
        _ => Err(Error::InvalidCoordinates),
    }
}

/// Free-text issue fields staff can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Category,
    Address,
}

impl Field {
    /// Returns the field name, which is also its column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Category => "category",
            Field::Address => "address",
        }
    }

    /// Current value of this field on an issue.
    pub fn get<'a>(&self, issue: &'a Issue) -> Option<&'a str> {
        match self {
            Field::Title => Some(issue.title.as_str()),
            Field::Description => issue.description.as_deref(),
            Field::Category => Some(issue.category.as_str()),
            Field::Address => Some(issue.address.as_str()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "description" | "desc" => Ok(Field::Description),
            "category" => Ok(Field::Category),
            "address" => Ok(Field::Address),
            _ => Err(Error::InvalidInput(format!(
                "unknown field: '{s}'\n  hint: editable fields are: title, description, category, address"
            ))),
        }
    }
}

/// Types of actions that can be recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Issue was reported or imported.
    Created,
    /// Title, description, category or address was modified.
    Edited,
    /// Status moved between open and in_progress.
    StatusChanged,
    /// Issue entered the resolved state.
    Resolved,
    /// Issue left the resolved state.
    Reopened,
    /// Priority was changed.
    Prioritized,
    /// Issue was assigned to a department.
    Assigned,
    /// Department assignment was removed.
    Unassigned,
    /// An admin note was added.
    Noted,
}

impl Action {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Created => "created",
            Action::Edited => "edited",
            Action::StatusChanged => "status_changed",
            Action::Resolved => "resolved",
            Action::Reopened => "reopened",
            Action::Prioritized => "prioritized",
            Action::Assigned => "assigned",
            Action::Unassigned => "unassigned",
            Action::Noted => "noted",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "created" => Ok(Action::Created),
            "edited" => Ok(Action::Edited),
            "status_changed" => Ok(Action::StatusChanged),
            "resolved" => Ok(Action::Resolved),
            "reopened" => Ok(Action::Reopened),
            "prioritized" => Ok(Action::Prioritized),
            "assigned" => Ok(Action::Assigned),
            "unassigned" => Ok(Action::Unassigned),
            "noted" => Ok(Action::Noted),
            _ => Err(Error::InvalidAction(s.to_string())),
        }
    }
}

/// An audit log entry recording a change to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this event belongs to.
    pub issue_id: String,
    /// What type of change occurred.
    pub action: Action,
    /// Previous value (for status, priority, assignment changes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// New value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// Explanation supplied by staff or by auto-assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event with the current timestamp.
    pub fn new(issue_id: String, action: Action) -> Self {
        Event {
            id: 0, // Will be set by database
            issue_id,
            action,
            old_value: None,
            new_value: None,
            reason: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the old and new values for this event (builder pattern).
    pub fn with_values(mut self, old: Option<String>, new: Option<String>) -> Self {
        self.old_value = old;
        self.new_value = new;
        self
    }

    /// Sets the reason for this event (builder pattern).
    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    /// Sets a specific timestamp for this event.
    pub fn with_timestamp(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// An admin note attached to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this note belongs to.
    pub issue_id: String,
    /// Status when the note was added.
    pub status: Status,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
