// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Departments that issues are assigned to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An administrative unit responsible for a class of issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique display name, also the assignment key on issues.
    pub name: String,
    /// Name of the department head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free text such as "Mon-Fri 08:00-17:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    /// Lower-cased keywords used by auto-assignment, in match order.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Number of issues currently assigned to the department.
    #[serde(default)]
    pub issues_assigned: u32,
    /// Number of assigned issues that are resolved.
    #[serde(default)]
    pub issues_resolved: u32,
    pub created_at: DateTime<Utc>,
}

impl Department {
    /// Creates a department with no contact details or keywords.
    pub fn new(name: String) -> Self {
        Department {
            name,
            head: None,
            email: None,
            phone: None,
            working_hours: None,
            keywords: Vec::new(),
            issues_assigned: 0,
            issues_resolved: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets the keyword list, normalizing it (builder pattern).
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = normalize_keywords(keywords);
        self
    }
}

/// Trim, lower-case and de-duplicate keywords, keeping first-seen order.
///
/// Blank entries are dropped.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for kw in keywords {
        let kw = kw.as_ref().trim().to_lowercase();
        if !kw.is_empty() && !out.contains(&kw) {
            out.push(kw);
        }
    }
    out
}

#[cfg(test)]
#[path = "department_tests.rs"]
mod tests;
