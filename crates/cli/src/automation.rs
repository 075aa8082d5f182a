// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automation rules: notifications produced by issue events.
//!
//! After a mutation records its event, every enabled rule whose trigger
//! fires on the event action and whose condition matches the issue's new
//! state sends a notification rendered from the rule's template. A rule
//! with a bad condition or a missing template is skipped with a warning.

use tracing::{debug, info, warn};
use ward_core::{AutomationRule, Database, Event, Issue, Notification, Template, Trigger};

use crate::error::Result;

/// What a rule would do for an issue, without sending anything.
#[derive(Debug)]
pub enum Evaluation {
    /// The condition does not match the issue.
    NoMatch,
    /// The condition matches; the rendered title and body.
    Fires { title: String, body: String },
}

/// Render a rule's notification for an issue if its condition matches.
///
/// The trigger is not checked, so this answers "would the rule fire for the
/// issue's current state".
pub fn evaluate(db: &Database, rule: &AutomationRule, issue: &Issue) -> Result<Evaluation> {
    if !rule.filter()?.matches(issue) {
        return Ok(Evaluation::NoMatch);
    }
    let template = db.get_template(&rule.template)?;
    let (title, body) = template.render(issue);
    Ok(Evaluation::Fires { title, body })
}

fn template_for(db: &Database, rule: &AutomationRule) -> Result<Option<Template>> {
    match db.get_template(&rule.template) {
        Ok(t) => Ok(Some(t)),
        Err(ward_core::Error::TemplateNotFound(name)) => {
            warn!(rule = %rule.name, template = %name, "skipping rule: template not found");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Run every enabled rule against a freshly recorded event.
///
/// Returns the notifications that were sent.
pub fn run_rules_for_event(db: &Database, event: &Event) -> Result<Vec<Notification>> {
    if Trigger::from_action(event.action).is_none() {
        return Ok(Vec::new());
    }
    let rules = db.enabled_rules()?;
    if rules.is_empty() {
        return Ok(Vec::new());
    }

    let issue = db.get_issue(&event.issue_id)?;
    let mut sent = Vec::new();
    for rule in &rules {
        match rule.fires(event.action, &issue) {
            Ok(true) => {}
            Ok(false) => {
                debug!(rule = %rule.name, issue = %issue.id, action = %event.action, "rule did not match");
                continue;
            }
            Err(e) => {
                warn!(rule = %rule.name, "skipping rule: {}", e);
                continue;
            }
        }
        let Some(template) = template_for(db, rule)? else {
            continue;
        };
        let (title, body) = template.render(&issue);
        let notification = db.send_notification(&title, &body, rule.audience, Some(&rule.name))?;
        info!(
            rule = %rule.name,
            issue = %issue.id,
            notification = notification.id,
            recipients = notification.recipients,
            "rule sent notification"
        );
        sent.push(notification);
    }
    Ok(sent)
}

#[cfg(test)]
#[path = "automation_tests.rs"]
mod tests;
