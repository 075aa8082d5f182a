// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status transitions: `status`, `start`, `resolve` and `reopen`.

use tracing::info;
use ward_core::{Action, Database, Event, Status};

use crate::error::Result;
use crate::validate::validate_reason;

use super::{apply_mutation, for_each_id, open_db, split_ids_and_value};

pub fn run(args: &[String], reason: Option<&str>) -> Result<()> {
    let (ids, status) = split_ids_and_value(args, "A status after the issue IDs")?;
    let status: Status = status.parse()?;
    let reason = validate_reason(reason)?;
    let (db, _, _) = open_db()?;
    run_impl(&db, ids, status, reason.as_deref())
}

pub fn start(ids: &[String], reason: Option<&str>) -> Result<()> {
    shortcut(ids, Status::InProgress, reason)
}

pub fn resolve(ids: &[String], reason: Option<&str>) -> Result<()> {
    shortcut(ids, Status::Resolved, reason)
}

pub fn reopen(ids: &[String], reason: Option<&str>) -> Result<()> {
    shortcut(ids, Status::Open, reason)
}

fn shortcut(ids: &[String], status: Status, reason: Option<&str>) -> Result<()> {
    let reason = validate_reason(reason)?;
    let (db, _, _) = open_db()?;
    run_impl(&db, ids, status, reason.as_deref())
}

/// Event action for a transition out of `from` into `to`.
pub(crate) fn action_for(from: Status, to: Status) -> Action {
    match (from, to) {
        (_, Status::Resolved) => Action::Resolved,
        (Status::Resolved, _) => Action::Reopened,
        _ => Action::StatusChanged,
    }
}

fn past_tense(status: Status) -> &'static str {
    match status {
        Status::Open => "Reopened",
        Status::InProgress => "Started",
        Status::Resolved => "Resolved",
    }
}

fn set_one(db: &Database, id: &str, status: Status, reason: Option<&str>) -> Result<()> {
    let id = db.resolve_id(id)?;
    let old = db.update_issue_status(&id, status)?;
    let action = action_for(old.status, status);
    let event = Event::new(id.clone(), action)
        .with_values(Some(old.status.to_string()), Some(status.to_string()))
        .with_reason(reason.map(str::to_string));
    apply_mutation(db, event)?;

    // A resolution summary is kept with the issue's notes.
    if let (Status::Resolved, Some(reason)) = (status, reason) {
        db.add_note(&id, Status::Resolved, reason)?;
        apply_mutation(
            db,
            Event::new(id.clone(), Action::Noted).with_values(None, Some(reason.to_string())),
        )?;
    }

    info!(issue = %id, from = %old.status, to = %status, "status changed");
    println!("{} {}", past_tense(status), id);
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    ids: &[String],
    status: Status,
    reason: Option<&str>,
) -> Result<()> {
    for_each_id(ids, |id| set_one(db, id, status, reason))
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
