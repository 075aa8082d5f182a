// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::{self, BufWriter, Write};

use serde::Serialize;
use tracing::info;
use ward_core::{Database, Event, Issue, Note};

use crate::error::Result;

use super::open_db;

#[derive(Serialize)]
struct ExportedIssue {
    #[serde(flatten)]
    issue: Issue,
    notes: Vec<Note>,
    events: Vec<Event>,
}

pub fn run(filepath: &str) -> Result<()> {
    let (db, _, _) = open_db()?;
    if filepath == "-" {
        let stdout = io::stdout();
        let count = write_issues(&db, stdout.lock())?;
        info!(count, "exported issues to stdout");
        Ok(())
    } else {
        run_impl(&db, filepath)
    }
}

/// Write every issue as one JSON line. Returns the number written.
pub(crate) fn write_issues<W: Write>(db: &Database, out: W) -> Result<usize> {
    let mut writer = BufWriter::new(out);
    let mut count = 0;
    for issue in db.list_issues()? {
        let notes = db.get_notes(&issue.id)?;
        let events = db.get_events(&issue.id)?;
        let exported = ExportedIssue {
            issue,
            notes,
            events,
        };
        writeln!(writer, "{}", serde_json::to_string(&exported)?)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, filepath: &str) -> Result<()> {
    let count = write_issues(db, File::create(filepath)?)?;
    info!(count, path = %filepath, "exported issues");
    println!("Exported {} issues to {}", count, filepath);
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
