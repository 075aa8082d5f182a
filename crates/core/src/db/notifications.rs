// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::notification::{Audience, Notification, Template};

use super::{parse_count, parse_db, parse_timestamp, Database};

const NOTIFICATION_COLUMNS: &str =
    "id, title, body, audience, recipients, reads, rule, created_at";

fn row_to_notification(row: &Row<'_>) -> std::result::Result<Notification, rusqlite::Error> {
    let audience_str: String = row.get(3)?;
    let created_str: String = row.get(7)?;
    Ok(Notification {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        audience: parse_db(&audience_str, "audience")?,
        recipients: parse_count(row.get(4)?, "recipients")?,
        reads: parse_count(row.get(5)?, "reads")?,
        rule: row.get(6)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

impl Database {
    /// Number of users a notification to `audience` would reach now.
    pub fn count_audience(&self, audience: Audience) -> Result<u32> {
        let users = self.list_users()?;
        let n = users.iter().filter(|u| audience.includes(u)).count();
        Ok(u32::try_from(n).unwrap_or(u32::MAX))
    }

    /// Send a notification, fixing its recipient count from current users.
    pub fn send_notification(
        &self,
        title: &str,
        body: &str,
        audience: Audience,
        rule: Option<&str>,
    ) -> Result<Notification> {
        let recipients = self.count_audience(audience)?;
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO notifications (title, body, audience, recipients, reads, rule, created_at)
             VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6)",
            params![
                title,
                body,
                audience.as_str(),
                recipients,
                rule,
                created_at.to_rfc3339()
            ],
        )?;
        Ok(Notification {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            body: body.to_string(),
            audience,
            recipients,
            reads: 0,
            rule: rule.map(str::to_string),
            created_at,
        })
    }

    /// Get a notification by id.
    pub fn get_notification(&self, id: i64) -> Result<Notification> {
        let sql = format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = ?1");
        self.conn
            .query_row(&sql, params![id], row_to_notification)
            .optional()?
            .ok_or_else(|| Error::NotificationNotFound(id.to_string()))
    }

    /// Most recent notifications, newest first.
    pub fn list_notifications(&self, limit: usize) -> Result<Vec<Notification>> {
        let sql = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications ORDER BY id DESC LIMIT ?1"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let notifications = stmt
            .query_map(params![limit_i64], row_to_notification)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(notifications)
    }

    /// Record a read receipt. Reads never exceed recipients.
    pub fn mark_notification_read(&self, id: i64) -> Result<Notification> {
        let affected = self.conn.execute(
            "UPDATE notifications SET reads = MIN(reads + 1, recipients) WHERE id = ?1",
            params![id],
        )?;
        if affected == 0 {
            return Err(Error::NotificationNotFound(id.to_string()));
        }
        self.get_notification(id)
    }

    /// Create a template.
    pub fn create_template(&self, template: &Template) -> Result<()> {
        let exists: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM templates WHERE name = ?1",
            params![template.name],
            |row| row.get(0),
        )?;
        if exists > 0 {
            return Err(Error::TemplateExists(template.name.clone()));
        }
        self.conn.execute(
            "INSERT INTO templates (name, title, body) VALUES (?1, ?2, ?3)",
            params![template.name, template.title, template.body],
        )?;
        Ok(())
    }

    /// Get a template by name.
    pub fn get_template(&self, name: &str) -> Result<Template> {
        self.conn
            .query_row(
                "SELECT name, title, body FROM templates WHERE name = ?1",
                params![name],
                |row| {
                    Ok(Template {
                        name: row.get(0)?,
                        title: row.get(1)?,
                        body: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))
    }

    /// All templates by name.
    pub fn list_templates(&self) -> Result<Vec<Template>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, title, body FROM templates ORDER BY name")?;
        let templates = stmt
            .query_map([], |row| {
                Ok(Template {
                    name: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(templates)
    }

    /// Delete a template.
    pub fn remove_template(&self, name: &str) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM templates WHERE name = ?1", params![name])?;
        if affected == 0 {
            return Err(Error::TemplateNotFound(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "notifications_tests.rs"]
mod tests;
