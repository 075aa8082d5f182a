// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ward-core operations.

use thiserror::Error;

/// All possible errors that can occur in ward-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("ambiguous issue ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("department not found: {0}\n  hint: run 'ward dept list' to see departments")]
    DepartmentNotFound(String),

    #[error("department already exists: {0}")]
    DepartmentExists(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("user already exists: {0}")]
    UserExists(String),

    #[error("notification not found: {0}")]
    NotificationNotFound(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template already exists: {0}")]
    TemplateExists(String),

    #[error("rule not found: {0}")]
    RuleNotFound(String),

    #[error("rule already exists: {0}")]
    RuleExists(String),

    #[error("invalid status change: issue is already {0}")]
    UnchangedStatus(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, resolved")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, critical")]
    InvalidPriority(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: citizen, moderator, admin")]
    InvalidRole(String),

    #[error("invalid user status: '{0}'\n  hint: valid statuses are: active, blocked, pending")]
    InvalidUserStatus(String),

    #[error("invalid source: '{0}'\n  hint: valid sources are: mobile, web")]
    InvalidSource(String),

    #[error("invalid audience: '{0}'\n  hint: valid audiences are: all, citizens, moderators, admins")]
    InvalidAudience(String),

    #[error("invalid trigger: '{0}'\n  hint: valid triggers are: issue.created, issue.status_changed, issue.resolved, issue.assigned, issue.prioritized, issue.noted, issue.*")]
    InvalidTrigger(String),

    #[error("invalid action: '{0}'")]
    InvalidAction(String),

    #[error("invalid condition: {0}")]
    InvalidCondition(String),

    #[error("invalid coordinates: latitude and longitude must be given together and in range")]
    InvalidCoordinates,

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for ward-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
