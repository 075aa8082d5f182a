// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use ward_core::{Database, Event, Issue, Note, Status};

use crate::cli::OutputFormat;
use crate::display::format_issue_details;
use crate::error::Result;

use super::open_db;

#[derive(Serialize)]
struct IssueDetails {
    #[serde(flatten)]
    issue: Issue,
    notes: Vec<Note>,
    events: Vec<Event>,
}

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, id, output)
}

/// Group notes by the status they were written under, in workflow order.
pub(crate) fn notes_by_status(notes: Vec<Note>) -> Vec<(Status, Vec<Note>)> {
    let mut groups: Vec<(Status, Vec<Note>)> =
        Status::ALL.iter().map(|s| (*s, Vec::new())).collect();
    for note in notes {
        if let Some((_, group)) = groups.iter_mut().find(|(s, _)| *s == note.status) {
            group.push(note);
        }
    }
    groups.retain(|(_, group)| !group.is_empty());
    groups
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, id: &str, output: OutputFormat) -> Result<()> {
    let id = db.resolve_id(id)?;
    let issue = db.get_issue(&id)?;
    let notes = db.get_notes(&id)?;
    let events = db.get_events(&id)?;

    match output {
        OutputFormat::Json => {
            let details = IssueDetails {
                issue,
                notes,
                events,
            };
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        OutputFormat::Id => println!("{}", issue.id),
        OutputFormat::Text => {
            let grouped = notes_by_status(notes);
            println!("{}", format_issue_details(&issue, &grouped, &events));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
