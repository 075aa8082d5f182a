// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::user::{Role, User, UserStatus};

use super::{parse_count, parse_db, parse_timestamp, parse_timestamp_opt, Database};

const USER_COLUMNS: &str =
    "id, email, display_name, role, status, source, issues_reported, last_active, created_at";

fn row_to_user(row: &Row<'_>) -> std::result::Result<User, rusqlite::Error> {
    let role_str: String = row.get(3)?;
    let status_str: String = row.get(4)?;
    let source_str: String = row.get(5)?;
    let created_str: String = row.get(8)?;
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        display_name: row.get(2)?,
        role: parse_db(&role_str, "role")?,
        status: parse_db(&status_str, "status")?,
        source: parse_db(&source_str, "source")?,
        issues_reported: parse_count(row.get(6)?, "issues_reported")?,
        last_active: parse_timestamp_opt(row.get(7)?, "last_active")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

impl Database {
    /// Create a user. Ids and emails (ignoring case) must be unique.
    pub fn create_user(&self, user: &User) -> Result<()> {
        let taken: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM users WHERE id = ?1 OR email = ?2",
            params![user.id, user.email],
            |row| row.get(0),
        )?;
        if taken > 0 {
            return Err(Error::UserExists(user.id.clone()));
        }

        self.conn.execute(
            "INSERT INTO users (id, email, display_name, role, status, source,
             issues_reported, last_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                user.id,
                user.email,
                user.display_name,
                user.role.as_str(),
                user.status.as_str(),
                user.source.as_str(),
                user.issues_reported,
                user.last_active.map(|t| t.to_rfc3339()),
                user.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a user by id or email.
    pub fn get_user(&self, id_or_email: &str) -> Result<User> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1 OR email = ?1");
        self.conn
            .query_row(&sql, params![id_or_email], row_to_user)
            .optional()?
            .ok_or_else(|| Error::UserNotFound(id_or_email.to_string()))
    }

    /// All users, oldest account first.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id");
        let mut stmt = self.conn.prepare(&sql)?;
        let users = stmt
            .query_map([], row_to_user)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(users)
    }

    /// Change account standing, returning the previous one.
    pub fn set_user_status(&self, id_or_email: &str, status: UserStatus) -> Result<UserStatus> {
        let user = self.get_user(id_or_email)?;
        self.conn.execute(
            "UPDATE users SET status = ?2 WHERE id = ?1",
            params![user.id, status.as_str()],
        )?;
        Ok(user.status)
    }

    /// Change a user's role, returning the previous one.
    pub fn set_user_role(&self, id_or_email: &str, role: Role) -> Result<Role> {
        let user = self.get_user(id_or_email)?;
        self.conn.execute(
            "UPDATE users SET role = ?2 WHERE id = ?1",
            params![user.id, role.as_str()],
        )?;
        Ok(user.role)
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
