// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automation rule management and dry-run evaluation.

use chrono::Utc;
use tracing::info;
use ward_core::{Audience, AutomationRule, Database, IssueFilter, Trigger};

use crate::automation::{evaluate, Evaluation};
use crate::cli::{OutputFormat, RuleCommand};
use crate::display::format_rule_line;
use crate::error::Result;
use crate::validate::validate_name;

use super::open_db;

/// Fields for `rule add`.
#[derive(Debug, Clone)]
pub struct NewRule {
    pub name: String,
    pub trigger: String,
    pub condition: String,
    pub template: String,
    pub audience: String,
    pub disabled: bool,
}

pub fn run(cmd: RuleCommand) -> Result<()> {
    let (db, _, _) = open_db()?;
    match cmd {
        RuleCommand::Add {
            name,
            trigger,
            condition,
            template,
            audience,
            disabled,
        } => add_impl(
            &db,
            NewRule {
                name,
                trigger,
                condition,
                template,
                audience,
                disabled,
            },
        ),
        RuleCommand::List { output } => list_impl(&db, output),
        RuleCommand::Enable { name } => enable_impl(&db, &name, true),
        RuleCommand::Disable { name } => enable_impl(&db, &name, false),
        RuleCommand::Remove { name } => remove_impl(&db, &name),
        RuleCommand::Test { name, issue } => test_impl(&db, &name, &issue).map(|_| ()),
    }
}

pub(crate) fn add_impl(db: &Database, input: NewRule) -> Result<()> {
    let name = validate_name("Rule name", &input.name)?;
    let trigger: Trigger = input.trigger.parse()?;
    let audience: Audience = input.audience.parse()?;
    let condition = input.condition.trim().to_string();
    // Reject a bad condition now rather than on every event.
    IssueFilter::parse_condition(&condition)?;
    let template = db.get_template(input.template.trim())?;

    let rule = AutomationRule {
        name,
        trigger,
        condition,
        template: template.name,
        audience,
        enabled: !input.disabled,
        created_at: Utc::now(),
    };
    db.create_rule(&rule)?;
    info!(rule = %rule.name, trigger = %rule.trigger, enabled = rule.enabled, "added rule");
    println!("Added rule {}", format_rule_line(&rule).trim_start_matches("- "));
    Ok(())
}

pub(crate) fn list_impl(db: &Database, output: OutputFormat) -> Result<()> {
    let rules = db.list_rules()?;
    match output {
        OutputFormat::Text => {
            if rules.is_empty() {
                println!("No rules");
            }
            for rule in &rules {
                println!("{}", format_rule_line(rule));
            }
        }
        OutputFormat::Id => {
            for rule in &rules {
                println!("{}", rule.name);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
    }
    Ok(())
}

pub(crate) fn enable_impl(db: &Database, name: &str, enabled: bool) -> Result<()> {
    db.set_rule_enabled(name, enabled)?;
    let state = if enabled { "Enabled" } else { "Disabled" };
    info!(rule = name, enabled, "toggled rule");
    println!("{} rule {}", state, name);
    Ok(())
}

pub(crate) fn remove_impl(db: &Database, name: &str) -> Result<()> {
    db.remove_rule(name)?;
    info!(rule = name, "removed rule");
    println!("Removed rule {}", name);
    Ok(())
}

/// Report whether a rule would fire for an issue's current state.
///
/// The trigger is ignored and nothing is sent.
pub(crate) fn test_impl(db: &Database, name: &str, issue_id: &str) -> Result<Evaluation> {
    let rule = db.get_rule(name)?;
    let id = db.resolve_id(issue_id)?;
    let issue = db.get_issue(&id)?;

    let evaluation = evaluate(db, &rule, &issue)?;
    match &evaluation {
        Evaluation::Fires { title, body } => {
            println!("Rule {} would fire for {}", rule.name, issue.id);
            println!("  Title: {}", title);
            println!("  Body: {}", body);
            let recipients = db.count_audience(rule.audience)?;
            println!("  Audience: {} ({} recipient(s))", rule.audience, recipients);
            if !rule.enabled {
                println!("  (rule is disabled)");
            }
        }
        Evaluation::NoMatch => {
            let condition = if rule.condition.is_empty() {
                "(always)"
            } else {
                rule.condition.as_str()
            };
            println!(
                "Rule {} would not fire for {}: condition {} does not match",
                rule.name, issue.id, condition
            );
        }
    }
    Ok(evaluation)
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
