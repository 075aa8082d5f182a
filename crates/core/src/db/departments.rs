// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rusqlite::{params, OptionalExtension, Row};

use crate::department::{normalize_keywords, Department};
use crate::error::{Error, Result};

use super::issues::department_name;
use super::{parse_count, parse_timestamp, Database};

const DEPARTMENT_COLUMNS: &str = "name, head, email, phone, working_hours, keywords,
     issues_assigned, issues_resolved, created_at";

fn row_to_department(row: &Row<'_>) -> std::result::Result<Department, rusqlite::Error> {
    let keywords_str: String = row.get(5)?;
    let created_str: String = row.get(8)?;
    let keywords: Vec<String> = serde_json::from_str(&keywords_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Department {
        name: row.get(0)?,
        head: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        working_hours: row.get(4)?,
        keywords,
        issues_assigned: parse_count(row.get(6)?, "issues_assigned")?,
        issues_resolved: parse_count(row.get(7)?, "issues_resolved")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

/// Counters recomputed from issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recount {
    pub name: String,
    pub before: (u32, u32),
    pub after: (u32, u32),
}

impl Recount {
    /// Whether the stored counters were wrong.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

impl Database {
    /// Create a department at the end of the match order.
    ///
    /// Counters start at zero regardless of the values passed in.
    pub fn create_department(&self, department: &Department) -> Result<()> {
        if department_name(&self.conn, &department.name).is_ok() {
            return Err(Error::DepartmentExists(department.name.clone()));
        }
        let keywords = serde_json::to_string(&normalize_keywords(&department.keywords))?;
        self.conn.execute(
            "INSERT INTO departments (name, position, head, email, phone, working_hours,
             keywords, created_at)
             VALUES (?1, (SELECT COALESCE(MAX(position), 0) + 1 FROM departments),
                     ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                department.name,
                department.head,
                department.email,
                department.phone,
                department.working_hours,
                keywords,
                department.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a department by name, ignoring case.
    pub fn get_department(&self, name: &str) -> Result<Department> {
        let sql = format!("SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE name = ?1");
        self.conn
            .query_row(&sql, params![name], row_to_department)
            .optional()?
            .ok_or_else(|| Error::DepartmentNotFound(name.to_string()))
    }

    /// All departments in match order.
    pub fn list_departments(&self) -> Result<Vec<Department>> {
        let sql = format!("SELECT {DEPARTMENT_COLUMNS} FROM departments ORDER BY position, name");
        let mut stmt = self.conn.prepare(&sql)?;
        let departments = stmt
            .query_map([], row_to_department)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(departments)
    }

    /// Update contact details.
    pub fn update_department_contact(&self, department: &Department) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE departments SET head = ?2, email = ?3, phone = ?4, working_hours = ?5
             WHERE name = ?1",
            params![
                department.name,
                department.head,
                department.email,
                department.phone,
                department.working_hours,
            ],
        )?;
        if affected == 0 {
            return Err(Error::DepartmentNotFound(department.name.clone()));
        }
        Ok(())
    }

    /// Replace a department's keyword list, returning the stored list.
    pub fn set_department_keywords(&self, name: &str, keywords: &[String]) -> Result<Vec<String>> {
        let keywords = normalize_keywords(keywords);
        let affected = self.conn.execute(
            "UPDATE departments SET keywords = ?2 WHERE name = ?1",
            params![name, serde_json::to_string(&keywords)?],
        )?;
        if affected == 0 {
            return Err(Error::DepartmentNotFound(name.to_string()));
        }
        Ok(keywords)
    }

    /// Move a department to a 1-based position in the match order.
    ///
    /// Positions past the end move it last.
    pub fn move_department(&self, name: &str, position: usize) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let canonical = department_name(&tx, name)?;
        let mut names: Vec<String> = {
            let mut stmt = tx.prepare("SELECT name FROM departments ORDER BY position, name")?;
            let names = stmt
                .query_map([], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            names
        };
        names.retain(|n| *n != canonical);
        let index = position.saturating_sub(1).min(names.len());
        names.insert(index, canonical);

        for (i, n) in names.iter().enumerate() {
            let pos = i64::try_from(i + 1).unwrap_or(i64::MAX);
            tx.execute(
                "UPDATE departments SET position = ?2 WHERE name = ?1",
                params![n, pos],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Delete a department, unassigning its issues.
    ///
    /// Returns the ids of the issues that were unassigned.
    pub fn remove_department(&self, name: &str) -> Result<Vec<String>> {
        let tx = self.conn.unchecked_transaction()?;
        let canonical = department_name(&tx, name)?;
        let ids: Vec<String> = {
            let mut stmt =
                tx.prepare("SELECT id FROM issues WHERE department = ?1 COLLATE NOCASE ORDER BY id")?;
            let ids = stmt
                .query_map(params![canonical], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            ids
        };
        tx.execute(
            "UPDATE issues SET department = NULL WHERE department = ?1 COLLATE NOCASE",
            params![canonical],
        )?;
        tx.execute("DELETE FROM departments WHERE name = ?1", params![canonical])?;
        tx.commit()?;
        Ok(ids)
    }

    /// Rebuild every department's counters from the issues table.
    pub fn recount_departments(&self) -> Result<Vec<Recount>> {
        let tx = self.conn.unchecked_transaction()?;
        let mut results = Vec::new();
        {
            let mut stmt = tx.prepare(
                "SELECT d.name, d.issues_assigned, d.issues_resolved,
                        (SELECT COUNT(*) FROM issues i WHERE i.department = d.name COLLATE NOCASE),
                        (SELECT COUNT(*) FROM issues i WHERE i.department = d.name COLLATE NOCASE
                             AND i.status = 'resolved')
                 FROM departments d ORDER BY d.position, d.name",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(Recount {
                    name: row.get(0)?,
                    before: (
                        parse_count(row.get(1)?, "issues_assigned")?,
                        parse_count(row.get(2)?, "issues_resolved")?,
                    ),
                    after: (
                        parse_count(row.get(3)?, "issues_assigned")?,
                        parse_count(row.get(4)?, "issues_resolved")?,
                    ),
                })
            })?;
            for row in rows {
                results.push(row?);
            }
        }
        for r in &results {
            tx.execute(
                "UPDATE departments SET issues_assigned = ?2, issues_resolved = ?3 WHERE name = ?1",
                params![r.name, r.after.0, r.after.1],
            )?;
        }
        tx.commit()?;
        Ok(results)
    }
}

#[cfg(test)]
#[path = "departments_tests.rs"]
mod tests;
