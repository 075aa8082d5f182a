// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::info;
use ward_core::{Action, Database, Event};

use crate::error::Result;
use crate::validate::validate_note;

use super::{apply_mutation, open_db};

pub fn run(id: &str, content: &str) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, id, content)
}

/// Internal implementation that accepts db for testing.
///
/// The note is filed under the issue's current status.
pub(crate) fn run_impl(db: &Database, id: &str, content: &str) -> Result<()> {
    let content = validate_note(content)?;
    let id = db.resolve_id(id)?;
    let issue = db.get_issue(&id)?;

    db.add_note(&id, issue.status, &content)?;
    apply_mutation(
        db,
        Event::new(id.clone(), Action::Noted).with_values(None, Some(content)),
    )?;
    info!(issue = %id, "added note");
    println!("Added note to {}", id);
    Ok(())
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
