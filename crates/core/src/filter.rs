// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue filtering shared by list views, analytics and automation rules.
//!
//! Multi-valued filters use groups: values inside a group are OR'd, groups are
//! AND'd. `-s open,in_progress -p high` therefore keeps open or in-progress
//! issues that are also high priority.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::issue::{Issue, Priority, Status};

/// OR-within, AND-across filter groups. `None` means no filter.
pub type Groups<T> = Option<Vec<Vec<T>>>;

/// Parse filter values: comma-separated values within each entry are OR'd,
/// multiple entries are AND'd together.
pub fn parse_groups<T, F>(values: &[String], parse_fn: F) -> Result<Groups<T>>
where
    F: Fn(&str) -> Result<T>,
{
    let mut groups = Vec::new();
    for value in values {
        let mut group = Vec::new();
        for part in value.split(',') {
            let part = part.trim();
            if !part.is_empty() {
                group.push(parse_fn(part)?);
            }
        }
        if !group.is_empty() {
            groups.push(group);
        }
    }

    if groups.is_empty() {
        Ok(None)
    } else {
        Ok(Some(groups))
    }
}

/// Check a value against filter groups.
pub fn matches_groups<T: PartialEq>(groups: &Groups<T>, value: &T) -> bool {
    match groups {
        None => true,
        Some(groups) => groups.iter().all(|group| group.contains(value)),
    }
}

/// Criteria for selecting issues.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilter {
    pub statuses: Groups<Status>,
    pub priorities: Groups<Priority>,
    /// Lower-cased categories.
    pub categories: Groups<String>,
    /// Lower-cased department names.
    pub departments: Groups<String>,
    /// Keep only issues without a department.
    pub unassigned: bool,
    /// Lower-cased text searched in id, title, description and address.
    pub search: Option<String>,
    /// Lower-cased text searched in title and description only.
    pub keyword: Option<String>,
    /// Lower-cased address substring.
    pub near: Option<String>,
    /// Reported at or after.
    pub since: Option<DateTime<Utc>>,
    /// Reported before.
    pub until: Option<DateTime<Utc>>,
}

impl IssueFilter {
    /// Set status groups from raw CLI values.
    pub fn with_statuses(mut self, values: &[String]) -> Result<Self> {
        self.statuses = parse_groups(values, |s| s.parse())?;
        Ok(self)
    }

    /// Set priority groups from raw CLI values.
    pub fn with_priorities(mut self, values: &[String]) -> Result<Self> {
        self.priorities = parse_groups(values, |s| s.parse())?;
        Ok(self)
    }

    /// Set category groups from raw CLI values.
    pub fn with_categories(mut self, values: &[String]) -> Result<Self> {
        self.categories = parse_groups(values, |s| Ok(s.to_lowercase()))?;
        Ok(self)
    }

    /// Set department groups from raw CLI values.
    pub fn with_departments(mut self, values: &[String]) -> Result<Self> {
        self.departments = parse_groups(values, |s| Ok(s.to_lowercase()))?;
        Ok(self)
    }

    /// Set the free-text search.
    pub fn with_search(mut self, text: Option<&str>) -> Self {
        self.search = non_blank_lower(text);
        self
    }

    /// Set the title/description keyword.
    pub fn with_keyword(mut self, text: Option<&str>) -> Self {
        self.keyword = non_blank_lower(text);
        self
    }

    /// Set the address substring.
    pub fn with_near(mut self, text: Option<&str>) -> Self {
        self.near = non_blank_lower(text);
        self
    }

    /// Returns true if the filter constrains status explicitly.
    pub fn has_status(&self) -> bool {
        self.statuses.is_some()
    }

    /// Check if an issue matches every configured criterion.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        if !matches_groups(&self.statuses, &issue.status) {
            return false;
        }
        if !matches_groups(&self.priorities, &issue.priority) {
            return false;
        }
        if !matches_groups(&self.categories, &issue.category.to_lowercase()) {
            return false;
        }
        if self.unassigned && issue.department.is_some() {
            return false;
        }
        if self.departments.is_some() {
            match &issue.department {
                Some(d) if matches_groups(&self.departments, &d.to_lowercase()) => {}
                _ => return false,
            }
        }
        if let Some(needle) = &self.search {
            let hit = issue.id.to_lowercase().contains(needle)
                || issue.title.to_lowercase().contains(needle)
                || issue
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(needle))
                || issue.address.to_lowercase().contains(needle);
            if !hit {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let hit = issue.title.to_lowercase().contains(keyword)
                || issue
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(keyword));
            if !hit {
                return false;
            }
        }
        if let Some(near) = &self.near {
            if !issue.address.to_lowercase().contains(near) {
                return false;
            }
        }
        if self.since.is_some_and(|since| issue.created_at < since) {
            return false;
        }
        if self.until.is_some_and(|until| issue.created_at >= until) {
            return false;
        }
        true
    }

    /// Keep only matching issues.
    pub fn apply(&self, mut issues: Vec<Issue>) -> Vec<Issue> {
        issues.retain(|issue| self.matches(issue));
        issues
    }

    /// Parse an automation-rule condition string.
    ///
    /// Supported flags:
    /// - `-s`, `--status`
    /// - `-p`, `--priority`
    /// - `-c`, `--category`
    /// - `-d`, `--department`
    /// - `-k`, `--keyword`: text in title or description
    /// - `-n`, `--near`: address substring
    /// - `--unassigned`
    ///
    /// An empty string matches every issue.
    pub fn parse_condition(condition: &str) -> Result<Self> {
        let tokens = tokenize(condition);
        let mut statuses = Vec::new();
        let mut priorities = Vec::new();
        let mut categories = Vec::new();
        let mut departments = Vec::new();
        let mut keyword = None;
        let mut near = None;
        let mut unassigned = false;

        let mut iter = tokens.into_iter();
        while let Some(flag) = iter.next() {
            if flag == "--unassigned" {
                unassigned = true;
                continue;
            }
            let target = match flag.as_str() {
                "-s" | "--status" => &mut statuses,
                "-p" | "--priority" => &mut priorities,
                "-c" | "--category" => &mut categories,
                "-d" | "--department" => &mut departments,
                "-k" | "--keyword" | "-n" | "--near" => {
                    let value = iter.next().ok_or_else(|| {
                        Error::InvalidCondition(format!("{flag} requires a value"))
                    })?;
                    if flag == "-k" || flag == "--keyword" {
                        keyword = Some(value);
                    } else {
                        near = Some(value);
                    }
                    continue;
                }
                other => {
                    return Err(Error::InvalidCondition(format!("unknown flag: {other}")));
                }
            };
            let value = iter
                .next()
                .ok_or_else(|| Error::InvalidCondition(format!("{flag} requires a value")))?;
            target.push(value);
        }

        let mut filter = IssueFilter::default()
            .with_statuses(&statuses)?
            .with_priorities(&priorities)?
            .with_categories(&categories)?
            .with_departments(&departments)?
            .with_keyword(keyword.as_deref())
            .with_near(near.as_deref());
        filter.unassigned = unassigned;
        Ok(filter)
    }
}

fn non_blank_lower(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Tokenize a flag string, respecting quoted values.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, ' ' | '\t') => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Parse a time bound: a `YYYY-MM-DD` date (midnight UTC) or a duration
/// before `now` such as `3d`, `2w`, `12h`, `30m`, `6M`, `1y`.
pub fn parse_time_bound(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
    }
    now.checked_sub_signed(parse_duration(input)?).ok_or_else(|| out_of_range(input))
}

fn out_of_range(s: &str) -> Error {
    Error::InvalidInput(format!(
        "time out of range: '{s}'\n  hint: use a date or a shorter duration (3d, 2w, 12h)"
    ))
}

/// Parse a duration string like "3d", "1w", "24h".
pub fn parse_duration(s: &str) -> Result<Duration> {
    let num_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if num_end == 0 {
        return Err(Error::InvalidInput(format!(
            "invalid time '{s}'\n  hint: use a date (2026-01-31) or a duration (3d, 2w, 12h)"
        )));
    }
    let (num_str, unit) = s.split_at(num_end);
    let num: i64 = num_str
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid number in duration: '{num_str}'")))?;

    let duration = match unit {
        "m" => Duration::try_minutes(num),
        "h" => Duration::try_hours(num),
        "d" => Duration::try_days(num),
        "w" => Duration::try_weeks(num),
        "M" => num.checked_mul(30).and_then(Duration::try_days),
        "y" => num.checked_mul(365).and_then(Duration::try_days),
        "" => {
            return Err(Error::InvalidInput(format!(
                "duration missing unit: '{s}'. Valid units: m, h, d, w, M, y"
            )))
        }
        _ => {
            return Err(Error::InvalidInput(format!(
                "unknown duration unit '{unit}'. Valid units: m, h, d, w, M, y"
            )))
        }
    };
    duration.ok_or_else(|| out_of_range(s))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
