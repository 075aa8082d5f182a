// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::rule::AutomationRule;

use super::{parse_db, parse_timestamp, Database};

const RULE_COLUMNS: &str = "name, trigger_event, condition, template, audience, enabled, created_at";

fn row_to_rule(row: &Row<'_>) -> std::result::Result<AutomationRule, rusqlite::Error> {
    let trigger_str: String = row.get(1)?;
    let audience_str: String = row.get(4)?;
    let created_str: String = row.get(6)?;
    Ok(AutomationRule {
        name: row.get(0)?,
        trigger: parse_db(&trigger_str, "trigger_event")?,
        condition: row.get(2)?,
        template: row.get(3)?,
        audience: parse_db(&audience_str, "audience")?,
        enabled: row.get(5)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

impl Database {
    /// Create an automation rule.
    pub fn create_rule(&self, rule: &AutomationRule) -> Result<()> {
        let exists: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM rules WHERE name = ?1",
            params![rule.name],
            |row| row.get(0),
        )?;
        if exists > 0 {
            return Err(Error::RuleExists(rule.name.clone()));
        }
        self.conn.execute(
            "INSERT INTO rules (name, trigger_event, condition, template, audience, enabled, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                rule.name,
                rule.trigger.as_str(),
                rule.condition,
                rule.template,
                rule.audience.as_str(),
                rule.enabled,
                rule.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a rule by name.
    pub fn get_rule(&self, name: &str) -> Result<AutomationRule> {
        let sql = format!("SELECT {RULE_COLUMNS} FROM rules WHERE name = ?1");
        self.conn
            .query_row(&sql, params![name], row_to_rule)
            .optional()?
            .ok_or_else(|| Error::RuleNotFound(name.to_string()))
    }

    /// All rules in creation order.
    pub fn list_rules(&self) -> Result<Vec<AutomationRule>> {
        let sql = format!("SELECT {RULE_COLUMNS} FROM rules ORDER BY created_at, name");
        let mut stmt = self.conn.prepare(&sql)?;
        let rules = stmt
            .query_map([], row_to_rule)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rules)
    }

    /// Enabled rules in creation order.
    pub fn enabled_rules(&self) -> Result<Vec<AutomationRule>> {
        Ok(self
            .list_rules()?
            .into_iter()
            .filter(|r| r.enabled)
            .collect())
    }

    /// Enable or disable a rule.
    pub fn set_rule_enabled(&self, name: &str, enabled: bool) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE rules SET enabled = ?2 WHERE name = ?1",
            params![name, enabled],
        )?;
        if affected == 0 {
            return Err(Error::RuleNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Delete a rule.
    pub fn remove_rule(&self, name: &str) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM rules WHERE name = ?1", params![name])?;
        if affected == 0 {
            return Err(Error::RuleNotFound(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
