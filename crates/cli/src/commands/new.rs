// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use tracing::info;
use ward_core::issue::validate_coordinates;
use ward_core::{Action, Database, Event, Issue, Priority};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::schema::IssueJson;
use crate::validate::{
    optional, validate_category, validate_title, MAX_ADDRESS_LENGTH, MAX_DESCRIPTION_LENGTH,
};

use super::assign::{log_initial_assignment, preassign};
use super::{apply_mutation, open_db};

/// Fields for an issue recorded by staff.
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub reporter: Option<String>,
    pub department: Option<String>,
}

pub fn run(input: NewIssue, output: OutputFormat) -> Result<()> {
    let (db, config, _) = open_db()?;
    run_impl(&db, &config, input, output).map(|_| ())
}

/// Attempts before giving up on a UNIQUE violation from a concurrent writer.
const MAX_ID_COLLISION_RETRIES: usize = 3;

fn is_unique_constraint_error(err: &ward_core::Error) -> bool {
    match err {
        ward_core::Error::Database(rusqlite::Error::SqliteFailure(e, _)) => {
            e.code == rusqlite::ErrorCode::ConstraintViolation
        }
        _ => false,
    }
}

/// Internal implementation that accepts db/config for testing. Returns the new ID.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    input: NewIssue,
    output: OutputFormat,
) -> Result<String> {
    let title = validate_title(&input.title)?;
    let description = optional(
        "Description",
        input.description.as_deref(),
        MAX_DESCRIPTION_LENGTH,
    )?;
    let category = validate_category(input.category.as_deref())?;
    let address = optional("Address", input.address.as_deref(), MAX_ADDRESS_LENGTH)?;
    let priority = match &input.priority {
        Some(p) => p.parse::<Priority>()?,
        None => Priority::default(),
    };
    validate_coordinates(input.latitude, input.longitude)?;
    let reporter = input
        .reporter
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    let department = match &input.department {
        Some(name) => Some(db.get_department(name)?.name),
        None => None,
    };

    let mut issue = Issue::new(String::new(), title, Utc::now());
    issue.description = description;
    issue.category = category;
    issue.address = address.unwrap_or_default();
    issue.priority = priority;
    issue.latitude = input.latitude;
    issue.longitude = input.longitude;
    issue.reporter = reporter;
    issue.department = department;

    let reason = if config.assignment.auto_assign {
        preassign(&mut issue, &db.list_departments()?)
    } else {
        None
    };

    let mut attempts = 0;
    loop {
        issue.id = generate_unique_id(&config.prefix, &issue.title, &issue.created_at, |id| {
            db.issue_exists(id)
        })?;
        match db.create_issue(&issue) {
            Ok(()) => break,
            Err(e) if is_unique_constraint_error(&e) && attempts < MAX_ID_COLLISION_RETRIES => {
                attempts += 1;
                issue.created_at = Utc::now();
                issue.updated_at = issue.created_at;
            }
            Err(e) => return Err(Error::Core(e)),
        }
    }
    info!(issue = %issue.id, priority = %issue.priority, "created issue");

    apply_mutation(db, Event::new(issue.id.clone(), Action::Created))?;
    log_initial_assignment(db, &issue, reason.clone())?;

    match output {
        OutputFormat::Text => {
            println!(
                "Created [{}] ({}) {}: {}",
                issue.priority, issue.category, issue.id, issue.title
            );
            if let Some(dept) = &issue.department {
                match &reason {
                    Some(reason) => println!("Assigned to {} ({})", dept, reason),
                    None => println!("Assigned to {}", dept),
                }
            }
        }
        OutputFormat::Id => println!("{}", issue.id),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&IssueJson::from(&issue))?
            );
        }
    }

    Ok(issue.id)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
