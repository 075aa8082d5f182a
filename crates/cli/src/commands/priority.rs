// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::info;
use ward_core::{Action, Database, Event, Priority};

use crate::error::Result;

use super::{apply_mutation, for_each_id, open_db, split_ids_and_value};

pub fn run(args: &[String]) -> Result<()> {
    let (ids, priority) = split_ids_and_value(args, "A priority after the issue IDs")?;
    let priority: Priority = priority.parse()?;
    let (db, _, _) = open_db()?;
    run_impl(&db, ids, priority)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, ids: &[String], priority: Priority) -> Result<()> {
    for_each_id(ids, |id| {
        let id = db.resolve_id(id)?;
        let old = db.update_issue_priority(&id, priority)?;
        if old == priority {
            println!("{} is already {}", id, priority);
            return Ok(());
        }
        apply_mutation(
            db,
            Event::new(id.clone(), Action::Prioritized)
                .with_values(Some(old.to_string()), Some(priority.to_string())),
        )?;
        info!(issue = %id, from = %old, to = %priority, "priority changed");
        println!("Set priority of {} to {}", id, priority);
        Ok(())
    })
}

#[cfg(test)]
#[path = "priority_tests.rs"]
mod tests;
