// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL import from the reporting client.
//!
//! Each line is one issue. Only `title` is required; missing fields take the
//! same defaults as `ward new`, and a missing `id` is generated. Lines whose
//! ID already exists are skipped. Export lines (issues with `notes` and
//! `events`) are accepted too; their notes are restored. Every line is
//! validated before the first write, so a bad line imports nothing.

use std::collections::HashSet;
use std::io::{self, BufRead, BufReader};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info};
use ward_core::issue::validate_coordinates;
use ward_core::{Action, Database, Event, Issue, Priority, Status};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::validate::{optional, validate_category, validate_title, MAX_ADDRESS_LENGTH};

use super::assign::{log_initial_assignment, preassign};
use super::{apply_mutation, open_db};

/// An issue line as written by the reporting client or `ward export`.
#[derive(Debug, Deserialize)]
struct IssueLine {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<Status>,
    #[serde(default)]
    priority: Option<Priority>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    reporter: Option<String>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    notes: Vec<NoteLine>,
}

#[derive(Debug, Deserialize)]
struct NoteLine {
    status: Status,
    content: String,
}

/// Counts reported after an import.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub created: usize,
    pub skipped: usize,
    pub assigned: usize,
}

pub fn run(file: Option<String>, input: Option<String>, dry_run: bool) -> Result<()> {
    let path = file.or(input).ok_or(Error::FieldRequired {
        field: "An input file (or '-' for stdin)",
    })?;
    let (db, config, _) = open_db()?;

    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = std::fs::File::open(&path)
            .map_err(|e| Error::Io(io::Error::other(format!("cannot open {}: {}", path, e))))?;
        Box::new(BufReader::new(file))
    };
    run_impl(&db, &config, reader, dry_run).map(|_| ())
}

/// Parse every line before touching the store.
fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, IssueLine)>> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed: IssueLine = serde_json::from_str(line).map_err(|e| Error::ParseLineError {
            line: index + 1,
            reason: e.to_string(),
        })?;
        lines.push((index + 1, parsed));
    }
    Ok(lines)
}

fn to_issue(db: &Database, config: &Config, line: &IssueLine) -> Result<Issue> {
    let created_at = line.created_at.unwrap_or_else(Utc::now);
    let title = validate_title(&line.title)?;
    let id = match &line.id {
        Some(id) => id.trim().to_string(),
        None => generate_unique_id(&config.prefix, &title, &created_at, |id| {
            db.issue_exists(id)
        })?,
    };
    validate_coordinates(line.latitude, line.longitude)?;

    let mut issue = Issue::new(id, title, created_at);
    issue.description = line
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    issue.status = line.status.unwrap_or(Status::Open);
    issue.priority = line.priority.unwrap_or_default();
    issue.category = validate_category(line.category.as_deref())?;
    issue.address = optional("Address", line.address.as_deref(), MAX_ADDRESS_LENGTH)?
        .unwrap_or_default();
    issue.latitude = line.latitude;
    issue.longitude = line.longitude;
    issue.reporter = line.reporter.clone();
    issue.updated_at = line.updated_at.unwrap_or(created_at);
    if issue.status == Status::Resolved {
        issue.resolved_at = Some(line.resolved_at.unwrap_or(issue.updated_at));
    }
    issue.department = match &line.department {
        Some(name) => Some(db.get_department(name)?.name),
        None => None,
    };
    Ok(issue)
}

/// An issue ready to be written, with its auto-assignment reason.
struct Planned<'a> {
    issue: Issue,
    reason: Option<String>,
    notes: &'a [NoteLine],
}

/// Validate every line and resolve ids and departments without writing.
fn plan<'a>(
    db: &Database,
    config: &Config,
    lines: &'a [(usize, IssueLine)],
    result: &mut ImportResult,
) -> Result<Vec<Planned<'a>>> {
    let departments = db.list_departments()?;
    let mut seen = HashSet::new();
    let mut planned = Vec::new();

    for (number, line) in lines {
        let mut issue = to_issue(db, config, line).map_err(|e| Error::ParseLineError {
            line: *number,
            reason: e.to_string(),
        })?;
        if db.issue_exists(&issue.id)? || !seen.insert(issue.id.clone()) {
            debug!(issue = %issue.id, "skipping existing issue");
            result.skipped += 1;
            continue;
        }

        let reason = if config.assignment.auto_assign {
            preassign(&mut issue, &departments)
        } else {
            None
        };
        if issue.department.is_some() {
            result.assigned += 1;
        }
        result.created += 1;
        planned.push(Planned {
            issue,
            reason,
            notes: &line.notes,
        });
    }
    Ok(planned)
}

/// Internal implementation that accepts db/config and a reader for testing.
pub(crate) fn run_impl<R: BufRead>(
    db: &Database,
    config: &Config,
    reader: R,
    dry_run: bool,
) -> Result<ImportResult> {
    let lines = parse_lines(reader)?;
    let mut result = ImportResult::default();
    let planned = plan(db, config, &lines, &mut result)?;

    for Planned {
        issue,
        reason,
        notes,
    } in planned
    {
        if dry_run {
            match &issue.department {
                Some(dept) => println!("Would import {} ({}): {}", issue.id, dept, issue.title),
                None => println!("Would import {}: {}", issue.id, issue.title),
            }
            continue;
        }

        db.create_issue(&issue)?;
        apply_mutation(
            db,
            Event::new(issue.id.clone(), Action::Created).with_timestamp(issue.created_at),
        )?;
        log_initial_assignment(db, &issue, reason)?;
        for note in notes {
            db.add_note(&issue.id, note.status, &note.content)?;
        }
    }

    let verb = if dry_run { "Would import" } else { "Imported" };
    println!(
        "{} {} issue(s) ({} assigned), skipped {} already present",
        verb, result.created, result.assigned, result.skipped
    );
    info!(
        created = result.created,
        skipped = result.skipped,
        dry_run,
        "import finished"
    );
    Ok(result)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
