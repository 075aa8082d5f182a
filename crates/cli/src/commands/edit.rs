// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::info;
use ward_core::{Action, Database, Event, Field};

use crate::error::Result;
use crate::validate::validate_field;

use super::{apply_mutation, open_db};

pub fn run(id: &str, field: &str, value: &str) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, id, field, value)
}

/// Internal implementation that accepts db for testing.
///
/// The event's reason names the edited field.
pub(crate) fn run_impl(db: &Database, id: &str, field: &str, value: &str) -> Result<()> {
    let field: Field = field.parse()?;
    let value = validate_field(field, value)?;
    let id = db.resolve_id(id)?;

    let old = db.update_issue_field(&id, field, &value)?;
    let new = (!value.is_empty()).then(|| value.clone());
    if old == new {
        println!("{} of {} is unchanged", field, id);
        return Ok(());
    }

    apply_mutation(
        db,
        Event::new(id.clone(), Action::Edited)
            .with_values(old, new)
            .with_reason(Some(field.to_string())),
    )?;
    info!(issue = %id, field = %field, "edited issue");
    if value.is_empty() {
        println!("Cleared {} of {}", field, id);
    } else {
        println!("Updated {} of {}", field, id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
