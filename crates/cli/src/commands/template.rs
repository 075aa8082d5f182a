// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notification templates used by automation rules.

use tracing::info;
use ward_core::{Database, Template};

use crate::cli::{OutputFormat, TemplateCommand};
use crate::display::format_template_line;
use crate::error::{Error, Result};
use crate::validate::{
    required, validate_name, MAX_NOTIFICATION_BODY_LENGTH, MAX_NOTIFICATION_TITLE_LENGTH,
};

use super::open_db;

pub fn run(cmd: TemplateCommand) -> Result<()> {
    let (db, _, _) = open_db()?;
    match cmd {
        TemplateCommand::Add { name, title, body } => add_impl(&db, &name, &title, &body),
        TemplateCommand::List { output } => list_impl(&db, output),
        TemplateCommand::Remove { name } => remove_impl(&db, &name),
    }
}

pub(crate) fn add_impl(db: &Database, name: &str, title: &str, body: &str) -> Result<()> {
    let template = Template {
        name: validate_name("Template name", name)?,
        title: required("Title", title, MAX_NOTIFICATION_TITLE_LENGTH)?,
        body: required("Body", body, MAX_NOTIFICATION_BODY_LENGTH)?,
    };
    db.create_template(&template)?;
    info!(template = %template.name, "added template");
    println!("Added template {}", template.name);
    Ok(())
}

pub(crate) fn list_impl(db: &Database, output: OutputFormat) -> Result<()> {
    let templates = db.list_templates()?;
    match output {
        OutputFormat::Text => {
            if templates.is_empty() {
                println!("No templates");
            }
            for t in &templates {
                println!("{}", format_template_line(t));
            }
        }
        OutputFormat::Id => {
            for t in &templates {
                println!("{}", t.name);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&templates)?),
    }
    Ok(())
}

/// Remove a template no rule refers to.
pub(crate) fn remove_impl(db: &Database, name: &str) -> Result<()> {
    let template = db.get_template(name)?;
    let users: Vec<String> = db
        .list_rules()?
        .into_iter()
        .filter(|r| r.template == template.name)
        .map(|r| r.name)
        .collect();
    if !users.is_empty() {
        return Err(Error::InvalidValue {
            field: "template",
            reason: format!(
                "'{}' is used by rule(s) {}; remove them first",
                template.name,
                users.join(", ")
            ),
        });
    }
    db.remove_template(&template.name)?;
    info!(template = %template.name, "removed template");
    println!("Removed template {}", template.name);
    Ok(())
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
