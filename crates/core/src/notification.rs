// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Broadcast notifications and their text templates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::user::{Role, User, UserStatus};

/// Who a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    All,
    Citizens,
    Moderators,
    Admins,
}

impl Audience {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Citizens => "citizens",
            Audience::Moderators => "moderators",
            Audience::Admins => "admins",
        }
    }

    /// Whether a user receives notifications sent to this audience.
    ///
    /// Only active accounts receive anything.
    pub fn includes(&self, user: &User) -> bool {
        if user.status != UserStatus::Active {
            return false;
        }
        match self {
            Audience::All => true,
            Audience::Citizens => user.role == Role::Citizen,
            Audience::Moderators => user.role == Role::Moderator,
            Audience::Admins => user.role == Role::Admin,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Audience {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "everyone" => Ok(Audience::All),
            "citizens" | "citizen" => Ok(Audience::Citizens),
            "moderators" | "moderator" => Ok(Audience::Moderators),
            "admins" | "admin" => Ok(Audience::Admins),
            _ => Err(Error::InvalidAudience(s.to_string())),
        }
    }
}

/// A message sent to an audience, with delivery counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Database-assigned identifier.
    pub id: i64,
    pub title: String,
    pub body: String,
    pub audience: Audience,
    /// Number of users the notification was delivered to, fixed at send time.
    pub recipients: u32,
    /// Number of read receipts, never above `recipients`.
    pub reads: u32,
    /// Name of the automation rule that produced it, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Read receipts as a whole percentage of recipients.
    pub fn read_rate(&self) -> u32 {
        if self.recipients == 0 {
            return 0;
        }
        (f64::from(self.reads) / f64::from(self.recipients) * 100.0).round() as u32
    }
}

/// Reusable notification text with `{placeholder}` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub title: String,
    pub body: String,
}

impl Template {
    /// Render title and body for an issue.
    pub fn render(&self, issue: &Issue) -> (String, String) {
        (render(&self.title, issue), render(&self.body, issue))
    }
}

/// Substitute issue fields into `{placeholder}` slots.
///
/// Unknown placeholders are left untouched.
pub fn render(text: &str, issue: &Issue) -> String {
    let department = issue.department.as_deref().unwrap_or("unassigned");
    let fields: [(&str, &str); 7] = [
        ("{id}", issue.id.as_str()),
        ("{title}", issue.title.as_str()),
        ("{status}", issue.status.as_str()),
        ("{priority}", issue.priority.as_str()),
        ("{category}", issue.category.as_str()),
        ("{department}", department),
        ("{address}", issue.address.as_str()),
    ];
    let mut out = text.to_string();
    for (key, value) in fields {
        out = out.replace(key, value);
    }
    out
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
