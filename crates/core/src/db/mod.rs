// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed document store.
//!
//! The [`Database`] struct provides all data access for issues, events,
//! notes, departments, users, notifications, templates and rules. Operations
//! are split across submodules by entity; each adds an `impl Database` block.
//!
//! Department and user counters are maintained by the mutations that affect
//! them, inside the same transaction.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;

use crate::error::{Error, Result};

mod departments;
mod events;
mod issues;
mod notifications;
mod rules;
mod users;

pub use departments::Recount;

/// SQL schema for the store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS issues (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    status TEXT NOT NULL DEFAULT 'open',
    priority TEXT NOT NULL DEFAULT 'medium',
    category TEXT NOT NULL DEFAULT 'other',
    address TEXT NOT NULL DEFAULT '',
    latitude REAL,
    longitude REAL,
    reporter TEXT,
    department TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    resolved_at TEXT
);

-- Status-aware admin notes
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id TEXT NOT NULL,
    status TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id)
);

-- Event log (audit trail)
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id TEXT NOT NULL,
    action TEXT NOT NULL,
    old_value TEXT,
    new_value TEXT,
    reason TEXT,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id)
);

CREATE TABLE IF NOT EXISTS departments (
    name TEXT PRIMARY KEY COLLATE NOCASE,
    position INTEGER NOT NULL,
    head TEXT,
    email TEXT,
    phone TEXT,
    working_hours TEXT,
    keywords TEXT NOT NULL DEFAULT '[]',   -- JSON array, match order
    issues_assigned INTEGER NOT NULL DEFAULT 0,
    issues_resolved INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE COLLATE NOCASE,
    display_name TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'citizen',
    status TEXT NOT NULL DEFAULT 'active',
    source TEXT NOT NULL DEFAULT 'mobile',
    issues_reported INTEGER NOT NULL DEFAULT 0,
    last_active TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS notifications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    audience TEXT NOT NULL,
    recipients INTEGER NOT NULL DEFAULT 0,
    reads INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    CHECK (reads <= recipients)
);

CREATE TABLE IF NOT EXISTS templates (
    name TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    body TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS rules (
    name TEXT PRIMARY KEY,
    trigger_event TEXT NOT NULL,
    condition TEXT NOT NULL DEFAULT '',
    template TEXT NOT NULL,
    audience TEXT NOT NULL DEFAULT 'all',
    enabled INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
CREATE INDEX IF NOT EXISTS idx_issues_department ON issues(department);
CREATE INDEX IF NOT EXISTS idx_issues_reporter ON issues(reporter);
CREATE INDEX IF NOT EXISTS idx_events_issue ON events(issue_id);
CREATE INDEX IF NOT EXISTS idx_notes_issue ON notes(issue_id);
CREATE INDEX IF NOT EXISTS idx_departments_position ON departments(position);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
pub(crate) fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| corrupted(format!("invalid value '{value}' in column '{column}'")))
}

/// Parse an RFC3339 timestamp from the database.
pub(crate) fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| corrupted(format!("invalid timestamp '{value}' in column '{column}'")))
}

/// Parse an optional RFC3339 timestamp from the database.
pub(crate) fn parse_timestamp_opt(
    value: Option<String>,
    column: &str,
) -> std::result::Result<Option<DateTime<Utc>>, rusqlite::Error> {
    value.map(|v| parse_timestamp(&v, column)).transpose()
}

/// Read a non-negative counter column.
pub(crate) fn parse_count(value: i64, column: &str) -> std::result::Result<u32, rusqlite::Error> {
    u32::try_from(value).map_err(|_| corrupted(format!("invalid count {value} in column '{column}'")))
}

fn corrupted(message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(Error::CorruptedData(message)),
    )
}

/// Run schema creation and all migrations on a database connection.
///
/// Migrations are idempotent and upgrade stores created by older versions.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_add_notification_rule(conn)?;
    Ok(())
}

/// Migration: record which automation rule produced a notification.
fn migrate_add_notification_rule(conn: &Connection) -> Result<()> {
    let has_rule: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('notifications') WHERE name = 'rule'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if !has_rule {
        conn.execute("ALTER TABLE notifications ADD COLUMN rule TEXT", [])?;
    }
    Ok(())
}

/// SQLite database connection with store operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL lets `log --follow` read while another process writes.
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
