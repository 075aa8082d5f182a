// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automation rules: notify an audience when issue events match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::filter::IssueFilter;
use crate::issue::{Action, Issue};
use crate::notification::Audience;

/// Issue event a rule listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    #[serde(rename = "issue.created")]
    Created,
    #[serde(rename = "issue.status_changed")]
    StatusChanged,
    #[serde(rename = "issue.resolved")]
    Resolved,
    #[serde(rename = "issue.assigned")]
    Assigned,
    #[serde(rename = "issue.prioritized")]
    Prioritized,
    #[serde(rename = "issue.noted")]
    Noted,
    /// Any event that maps to a trigger.
    #[serde(rename = "issue.*")]
    Any,
}

impl Trigger {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Created => "issue.created",
            Trigger::StatusChanged => "issue.status_changed",
            Trigger::Resolved => "issue.resolved",
            Trigger::Assigned => "issue.assigned",
            Trigger::Prioritized => "issue.prioritized",
            Trigger::Noted => "issue.noted",
            Trigger::Any => "issue.*",
        }
    }

    /// The trigger an event action raises, if any.
    ///
    /// Reopening counts as a status change. Edits and unassignment raise
    /// nothing.
    pub fn from_action(action: Action) -> Option<Trigger> {
        match action {
            Action::Created => Some(Trigger::Created),
            Action::StatusChanged | Action::Reopened => Some(Trigger::StatusChanged),
            Action::Resolved => Some(Trigger::Resolved),
            Action::Assigned => Some(Trigger::Assigned),
            Action::Prioritized => Some(Trigger::Prioritized),
            Action::Noted => Some(Trigger::Noted),
            Action::Edited | Action::Unassigned => None,
        }
    }

    /// Returns true if this trigger fires for an event action.
    pub fn fires_on(&self, action: Action) -> bool {
        match Trigger::from_action(action) {
            None => false,
            Some(raised) => *self == Trigger::Any || *self == raised,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Trigger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        let name = name.strip_prefix("issue.").unwrap_or(&name);
        match name {
            "created" => Ok(Trigger::Created),
            "status_changed" | "status" => Ok(Trigger::StatusChanged),
            "resolved" => Ok(Trigger::Resolved),
            "assigned" => Ok(Trigger::Assigned),
            "prioritized" | "priority" => Ok(Trigger::Prioritized),
            "noted" => Ok(Trigger::Noted),
            "*" => Ok(Trigger::Any),
            _ => Err(Error::InvalidTrigger(s.to_string())),
        }
    }
}

/// A stored automation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationRule {
    pub name: String,
    pub trigger: Trigger,
    /// Filter flags an issue must satisfy; empty matches every issue.
    #[serde(default)]
    pub condition: String,
    /// Name of the template the notification is rendered from.
    pub template: String,
    #[serde(default)]
    pub audience: Audience,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl AutomationRule {
    /// Parse the condition string.
    pub fn filter(&self) -> Result<IssueFilter> {
        IssueFilter::parse_condition(&self.condition)
    }

    /// Check trigger and condition against an event on an issue.
    ///
    /// Disabled rules never fire.
    pub fn fires(&self, action: Action, issue: &Issue) -> Result<bool> {
        if !self.enabled || !self.trigger.fires_on(action) {
            return Ok(false);
        }
        Ok(self.filter()?.matches(issue))
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
