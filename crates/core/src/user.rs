// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Platform user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// What a user is allowed to do on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Citizen,
    Moderator,
    Admin,
}

impl Role {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "citizen" => Ok(Role::Citizen),
            "moderator" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// Account standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
    /// Signed up but not yet approved by a moderator.
    Pending,
}

impl UserStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
            UserStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "blocked" => Ok(UserStatus::Blocked),
            "pending" => Ok(UserStatus::Pending),
            _ => Err(Error::InvalidUserStatus(s.to_string())),
        }
    }
}

/// Client the user signed up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    Mobile,
    Web,
}

impl Source {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Mobile => "mobile",
            Source::Web => "web",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mobile" | "app" => Ok(Source::Mobile),
            "web" => Ok(Source::Web),
            _ => Err(Error::InvalidSource(s.to_string())),
        }
    }
}

/// A platform account, citizen or staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub source: Source,
    /// Number of issues this user has reported.
    #[serde(default)]
    pub issues_reported: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates an active citizen account.
    pub fn new(id: String, email: String, display_name: String) -> Self {
        User {
            id,
            email,
            display_name,
            role: Role::Citizen,
            status: UserStatus::Active,
            source: Source::Mobile,
            issues_reported: 0,
            last_active: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
