// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod assign;
pub mod dept;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod new;
pub mod note;
pub mod notify;
pub mod priority;
pub mod rule;
pub mod schema;
pub mod show;
pub mod stats;
pub mod status;
pub mod template;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod user;

use std::path::PathBuf;

use tracing::warn;
use ward_core::{Database, Event};

use crate::automation;
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    let db = crate::time_phase!("db::open", { Database::open(&db_path)? });
    Ok((db, config, work_dir))
}

/// Record a mutation's event, then run automation rules for it.
///
/// Rule failures are logged and never fail the mutation.
pub fn apply_mutation(db: &Database, event: Event) -> Result<i64> {
    let id = db.log_event(&event)?;
    let event = Event { id, ..event };
    if let Err(e) = crate::time_phase!("automation", {
        automation::run_rules_for_event(db, &event)
    }) {
        warn!(issue = %event.issue_id, action = %event.action, "automation failed: {}", e);
    }
    Ok(id)
}

/// Split `IDS... VALUE` arguments into the IDs and the trailing value.
pub(crate) fn split_ids_and_value<'a>(
    args: &'a [String],
    field: &'static str,
) -> Result<(&'a [String], &'a str)> {
    match args.split_last() {
        Some((value, ids)) if !ids.is_empty() => Ok((ids, value.as_str())),
        _ => Err(Error::FieldRequired { field }),
    }
}

/// Apply `op` to every ID, reporting failures on stderr.
///
/// Every ID is attempted; if any failed the result is
/// [`Error::PartialBulkFailure`] (or the single error when only one ID was given).
pub(crate) fn for_each_id<F>(ids: &[String], mut op: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    if let [only] = ids {
        return op(only);
    }

    let mut failed = 0;
    for id in ids {
        if let Err(e) = op(id) {
            eprintln!("error: {}: {}", id, e);
            failed += 1;
        }
    }
    if failed > 0 {
        return Err(Error::PartialBulkFailure {
            succeeded: ids.len() - failed,
            failed,
        });
    }
    Ok(())
}
