// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::issue::{Field, Issue, Priority, Status};

use super::{parse_db, parse_timestamp, parse_timestamp_opt, Database};

/// Minimum length of a partial id accepted by [`Database::resolve_id`].
const MIN_PARTIAL_ID: usize = 3;

const ISSUE_COLUMNS: &str = "id, title, description, status, priority, category, address,
     latitude, longitude, reporter, department, created_at, updated_at, resolved_at";

fn row_to_issue(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let status_str: String = row.get(3)?;
    let priority_str: String = row.get(4)?;
    let created_str: String = row.get(11)?;
    let updated_str: String = row.get(12)?;
    Ok(Issue {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: parse_db(&status_str, "status")?,
        priority: parse_db(&priority_str, "priority")?,
        category: row.get(5)?,
        address: row.get(6)?,
        latitude: row.get(7)?,
        longitude: row.get(8)?,
        reporter: row.get(9)?,
        department: row.get(10)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
        resolved_at: parse_timestamp_opt(row.get(13)?, "resolved_at")?,
    })
}

/// Canonical name of a department, looked up case-insensitively.
pub(super) fn department_name(conn: &Connection, name: &str) -> Result<String> {
    conn.query_row(
        "SELECT name FROM departments WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )
    .optional()?
    .ok_or_else(|| Error::DepartmentNotFound(name.to_string()))
}

/// Add to a department's assigned and resolved counters, clamping at zero.
pub(super) fn adjust_department(
    conn: &Connection,
    name: &str,
    assigned: i64,
    resolved: i64,
) -> Result<()> {
    conn.execute(
        "UPDATE departments
         SET issues_assigned = MAX(0, issues_assigned + ?2),
             issues_resolved = MAX(0, issues_resolved + ?3)
         WHERE name = ?1",
        params![name, assigned, resolved],
    )?;
    Ok(())
}

fn get_issue_in(conn: &Connection, id: &str) -> Result<Issue> {
    let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE id = ?1");
    conn.query_row(&sql, params![id], row_to_issue)
        .optional()?
        .ok_or_else(|| Error::IssueNotFound(id.to_string()))
}

impl Database {
    /// Create a new issue.
    ///
    /// The department, if set, must exist; its counters are incremented. A
    /// reporter that matches a user id bumps that user's report count.
    pub fn create_issue(&self, issue: &Issue) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let department = match &issue.department {
            Some(name) => Some(department_name(&tx, name)?),
            None => None,
        };

        tx.execute(
            "INSERT INTO issues (id, title, description, status, priority, category, address,
             latitude, longitude, reporter, department, created_at, updated_at, resolved_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                issue.id,
                issue.title,
                issue.description,
                issue.status.as_str(),
                issue.priority.as_str(),
                issue.category,
                issue.address,
                issue.latitude,
                issue.longitude,
                issue.reporter,
                department,
                issue.created_at.to_rfc3339(),
                issue.updated_at.to_rfc3339(),
                issue.resolved_at.map(|t| t.to_rfc3339()),
            ],
        )?;

        if let Some(name) = &department {
            let resolved = i64::from(issue.status == Status::Resolved);
            adjust_department(&tx, name, 1, resolved)?;
        }
        if let Some(reporter) = &issue.reporter {
            tx.execute(
                "UPDATE users SET issues_reported = issues_reported + 1, last_active = ?2
                 WHERE id = ?1",
                params![reporter, issue.created_at.to_rfc3339()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Get an issue by ID.
    pub fn get_issue(&self, id: &str) -> Result<Issue> {
        get_issue_in(&self.conn, id)
    }

    /// Check if an issue exists.
    pub fn issue_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM issues WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Resolve a potentially partial issue ID to a full ID.
    ///
    /// An exact match wins. Otherwise the input must be at least three
    /// characters and a prefix of exactly one issue.
    pub fn resolve_id(&self, partial_id: &str) -> Result<String> {
        if self.issue_exists(partial_id)? {
            return Ok(partial_id.to_string());
        }
        if partial_id.len() < MIN_PARTIAL_ID {
            return Err(Error::IssueNotFound(partial_id.to_string()));
        }

        let escaped = partial_id.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM issues WHERE id LIKE ?1 ESCAPE '\\' ORDER BY id")?;
        let matches = stmt
            .query_map(params![format!("{escaped}%")], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match matches.len() {
            0 => Err(Error::IssueNotFound(partial_id.to_string())),
            1 => Ok(matches.into_iter().next().unwrap_or_default()),
            _ => Err(Error::AmbiguousId {
                prefix: partial_id.to_string(),
                matches,
            }),
        }
    }

    /// All issues, newest first.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues ORDER BY created_at DESC, id");
        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt
            .query_map([], row_to_issue)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Issues assigned to a department, oldest first.
    pub fn issues_for_department(&self, department: &str) -> Result<Vec<Issue>> {
        let sql = format!(
            "SELECT {ISSUE_COLUMNS} FROM issues WHERE department = ?1 COLLATE NOCASE
             ORDER BY created_at, id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt
            .query_map(params![department], row_to_issue)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Change an issue's status, returning the issue as it was before.
    ///
    /// Entering `resolved` stamps `resolved_at` and counts the issue as
    /// resolved for its department; leaving it clears both.
    pub fn update_issue_status(&self, id: &str, status: Status) -> Result<Issue> {
        self.update_issue_status_at(id, status, Utc::now())
    }

    /// [`Database::update_issue_status`] with an explicit timestamp.
    pub fn update_issue_status_at(
        &self,
        id: &str,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<Issue> {
        let tx = self.conn.unchecked_transaction()?;
        let old = get_issue_in(&tx, id)?;
        if !old.status.can_transition_to(status) {
            return Err(Error::UnchangedStatus(status.to_string()));
        }

        let resolved_at = (status == Status::Resolved).then(|| now.to_rfc3339());
        tx.execute(
            "UPDATE issues SET status = ?1, updated_at = ?2, resolved_at = ?3 WHERE id = ?4",
            params![status.as_str(), now.to_rfc3339(), resolved_at, id],
        )?;

        if let Some(dept) = &old.department {
            let delta = match (old.status, status) {
                (Status::Resolved, _) => -1,
                (_, Status::Resolved) => 1,
                _ => 0,
            };
            if delta != 0 {
                adjust_department(&tx, dept, 0, delta)?;
            }
        }

        tx.commit()?;
        Ok(old)
    }

    /// Change an issue's priority, returning the previous one.
    pub fn update_issue_priority(&self, id: &str, priority: Priority) -> Result<Priority> {
        let old = self.get_issue(id)?;
        self.conn.execute(
            "UPDATE issues SET priority = ?1, updated_at = ?2 WHERE id = ?3",
            params![priority.as_str(), Utc::now().to_rfc3339(), id],
        )?;
        Ok(old.priority)
    }

    /// Assign an issue to a department, or unassign it with `None`.
    ///
    /// Returns the previous department. Counters move from the old
    /// department to the new one.
    pub fn set_issue_department(&self, id: &str, department: Option<&str>) -> Result<Option<String>> {
        let tx = self.conn.unchecked_transaction()?;
        let old = get_issue_in(&tx, id)?;
        let new = match department {
            Some(name) => Some(department_name(&tx, name)?),
            None => None,
        };

        tx.execute(
            "UPDATE issues SET department = ?1, updated_at = ?2 WHERE id = ?3",
            params![new, Utc::now().to_rfc3339(), id],
        )?;

        let resolved = i64::from(old.status == Status::Resolved);
        if let Some(prev) = &old.department {
            adjust_department(&tx, prev, -1, -resolved)?;
        }
        if let Some(next) = &new {
            adjust_department(&tx, next, 1, resolved)?;
        }

        tx.commit()?;
        Ok(old.department)
    }

    /// Update a free-text field, returning its previous value.
    ///
    /// An empty description is stored as no description.
    pub fn update_issue_field(&self, id: &str, field: Field, value: &str) -> Result<Option<String>> {
        let old = self.get_issue(id)?;
        let previous = field.get(&old).map(str::to_string);
        let stored: Option<&str> = match field {
            Field::Description if value.is_empty() => None,
            _ => Some(value),
        };
        let sql = format!(
            "UPDATE issues SET {} = ?1, updated_at = ?2 WHERE id = ?3",
            field.as_str()
        );
        self.conn
            .execute(&sql, params![stored, Utc::now().to_rfc3339(), id])?;
        Ok(previous)
    }
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
