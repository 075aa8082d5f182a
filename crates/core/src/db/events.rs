// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use rusqlite::{params, Row};

use crate::error::Result;
use crate::issue::{Event, Note, Status};

use super::{parse_db, parse_timestamp, Database};

const EVENT_COLUMNS: &str = "id, issue_id, action, old_value, new_value, reason, created_at";

fn row_to_event(row: &Row<'_>) -> std::result::Result<Event, rusqlite::Error> {
    let action_str: String = row.get(2)?;
    let created_str: String = row.get(6)?;
    Ok(Event {
        id: row.get(0)?,
        issue_id: row.get(1)?,
        action: parse_db(&action_str, "action")?,
        old_value: row.get(3)?,
        new_value: row.get(4)?,
        reason: row.get(5)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

impl Database {
    /// Log an event.
    pub fn log_event(&self, event: &Event) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO events (issue_id, action, old_value, new_value, reason, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                event.issue_id,
                event.action.as_str(),
                event.old_value,
                event.new_value,
                event.reason,
                event.created_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all events for an issue, in the order they were logged.
    pub fn get_events(&self, issue_id: &str) -> Result<Vec<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE issue_id = ?1 ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let events = stmt
            .query_map(params![issue_id], row_to_event)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(events)
    }

    /// Get the most recent events across all issues, newest first.
    pub fn get_recent_events(&self, limit: usize) -> Result<Vec<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY id DESC LIMIT ?1");
        let mut stmt = self.conn.prepare(&sql)?;
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let events = stmt
            .query_map(params![limit_i64], row_to_event)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(events)
    }

    /// Events logged after `after_id`, oldest first.
    ///
    /// Used to follow the log: pass the id of the last event seen.
    pub fn events_after(&self, after_id: i64, issue_id: Option<&str>) -> Result<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE id > ?1 AND (?2 IS NULL OR issue_id = ?2) ORDER BY id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let events = stmt
            .query_map(params![after_id, issue_id], row_to_event)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(events)
    }

    /// Id of the newest event, or 0 for an empty log.
    pub fn last_event_id(&self) -> Result<i64> {
        let id: Option<i64> = self
            .conn
            .query_row("SELECT MAX(id) FROM events", [], |row| row.get(0))?;
        Ok(id.unwrap_or(0))
    }

    /// Add a note to an issue.
    pub fn add_note(&self, issue_id: &str, status: Status, content: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO notes (issue_id, status, content, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![issue_id, status.as_str(), content, Utc::now().to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all notes for an issue, ordered by creation.
    pub fn get_notes(&self, issue_id: &str) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, status, content, created_at
             FROM notes WHERE issue_id = ?1 ORDER BY id",
        )?;

        let notes = stmt
            .query_map(params![issue_id], |row| {
                let status_str: String = row.get(2)?;
                let created_str: String = row.get(4)?;
                Ok(Note {
                    id: row.get(0)?,
                    issue_id: row.get(1)?,
                    status: parse_db(&status_str, "status")?,
                    content: row.get(3)?,
                    created_at: parse_timestamp(&created_str, "created_at")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(notes)
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
