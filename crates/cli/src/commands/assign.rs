// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Department assignment: explicit, keyword-matched and bulk.

use tracing::info;
use ward_core::matcher::match_issue;
use ward_core::{Action, Database, Department, Event, Issue, Status};

use crate::error::Result;

use super::{apply_mutation, for_each_id, open_db, split_ids_and_value};

pub fn run(args: &[String], auto: bool) -> Result<()> {
    let (db, _, _) = open_db()?;
    if auto {
        auto_impl(&db, args)
    } else {
        let (ids, department) = split_ids_and_value(args, "A department after the issue IDs")?;
        run_impl(&db, ids, department)
    }
}

pub fn unassign(ids: &[String]) -> Result<()> {
    let (db, _, _) = open_db()?;
    unassign_impl(&db, ids)
}

pub fn auto_assign(dry_run: bool) -> Result<()> {
    let (db, _, _) = open_db()?;
    auto_assign_impl(&db, dry_run).map(|_| ())
}

/// Set the department of a not-yet-stored issue by keyword match.
///
/// Returns the event reason when a department was chosen.
pub(crate) fn preassign(issue: &mut Issue, departments: &[Department]) -> Option<String> {
    if issue.department.is_some() {
        return None;
    }
    let found = match_issue(issue, departments)?;
    issue.department = Some(found.department.name.clone());
    Some(found.reason())
}

/// Record the assignment event for an issue created with a department.
pub(crate) fn log_initial_assignment(
    db: &Database,
    issue: &Issue,
    reason: Option<String>,
) -> Result<()> {
    if let Some(dept) = &issue.department {
        let event = Event::new(issue.id.clone(), Action::Assigned)
            .with_values(None, Some(dept.clone()))
            .with_reason(reason);
        apply_mutation(db, event)?;
    }
    Ok(())
}

fn assign_one(db: &Database, id: &str, department: &str, reason: Option<String>) -> Result<bool> {
    let old = db.set_issue_department(id, Some(department))?;
    if old.as_deref() == Some(department) {
        return Ok(false);
    }
    let event = Event::new(id.to_string(), Action::Assigned)
        .with_values(old, Some(department.to_string()))
        .with_reason(reason);
    apply_mutation(db, event)?;
    info!(issue = %id, department = %department, "assigned");
    Ok(true)
}

pub(crate) fn run_impl(db: &Database, ids: &[String], department: &str) -> Result<()> {
    let dept = db.get_department(department)?;
    for_each_id(ids, |id| {
        let id = db.resolve_id(id)?;
        if assign_one(db, &id, &dept.name, None)? {
            println!("Assigned {} to {}", id, dept.name);
        } else {
            println!("{} is already assigned to {}", id, dept.name);
        }
        Ok(())
    })
}

pub(crate) fn auto_impl(db: &Database, ids: &[String]) -> Result<()> {
    let departments = db.list_departments()?;
    for_each_id(ids, |id| {
        let issue = db.get_issue(&db.resolve_id(id)?)?;
        let Some(found) = match_issue(&issue, &departments) else {
            println!("No department keyword matches {}", issue.id);
            return Ok(());
        };
        let name = &found.department.name;
        if assign_one(db, &issue.id, name, Some(found.reason()))? {
            println!("Assigned {} to {} ({})", issue.id, name, found.reason());
        } else {
            println!("{} is already assigned to {}", issue.id, name);
        }
        Ok(())
    })
}

pub(crate) fn unassign_impl(db: &Database, ids: &[String]) -> Result<()> {
    for_each_id(ids, |id| {
        let id = db.resolve_id(id)?;
        match db.set_issue_department(&id, None)? {
            Some(old) => {
                let event =
                    Event::new(id.clone(), Action::Unassigned).with_values(Some(old.clone()), None);
                apply_mutation(db, event)?;
                info!(issue = %id, department = %old, "unassigned");
                println!("Unassigned {} from {}", id, old);
            }
            None => println!("{} is not assigned", id),
        }
        Ok(())
    })
}

/// Assign every open, unassigned issue by keyword match. Returns the number matched.
pub(crate) fn auto_assign_impl(db: &Database, dry_run: bool) -> Result<usize> {
    let departments = db.list_departments()?;
    let pending: Vec<Issue> = db
        .list_issues()?
        .into_iter()
        .filter(|i| i.status == Status::Open && i.department.is_none())
        .collect();

    let mut matched = 0;
    for issue in &pending {
        let Some(found) = match_issue(issue, &departments) else {
            continue;
        };
        matched += 1;
        if dry_run {
            println!(
                "Would assign {} to {} ({})",
                issue.id,
                found.department.name,
                found.reason()
            );
        } else {
            assign_one(db, &issue.id, &found.department.name, Some(found.reason()))?;
            println!(
                "Assigned {} to {} ({})",
                issue.id,
                found.department.name,
                found.reason()
            );
        }
    }

    let verb = if dry_run { "would be assigned" } else { "assigned" };
    println!(
        "{} of {} open unassigned issue(s) {}",
        matched,
        pending.len(),
        verb
    );
    Ok(matched)
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
