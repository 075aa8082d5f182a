// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::thread;
use std::time::Duration;

use tracing::debug;
use ward_core::Database;

use crate::display::{format_event, format_event_with_id};
use crate::error::Result;

use super::open_db;

/// Events shown without `--limit`.
pub const DEFAULT_LIMIT: usize = 20;

pub fn run(id: Option<&str>, limit: Option<usize>, follow: bool) -> Result<()> {
    let (db, config, _) = open_db()?;
    let id = id.map(|id| db.resolve_id(id)).transpose()?;
    run_impl(&db, id.as_deref(), limit)?;
    if follow {
        let interval = Duration::from_millis(config.watch.interval_ms.max(1));
        let mut last_id = db.last_event_id()?;
        loop {
            thread::sleep(interval);
            last_id = poll(&db, last_id, id.as_deref())?;
        }
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// With an issue, its history is printed oldest first; otherwise the most
/// recent events across all issues, newest first.
pub(crate) fn run_impl(db: &Database, id: Option<&str>, limit: Option<usize>) -> Result<()> {
    match id {
        Some(issue_id) => {
            db.get_issue(issue_id)?;
            let events = db.get_events(issue_id)?;
            if events.is_empty() {
                println!("No events for {}", issue_id);
            }
            let skip = limit.map_or(0, |n| events.len().saturating_sub(n));
            for event in events.iter().skip(skip) {
                println!("{}", format_event(event));
            }
        }
        None => {
            let events = db.get_recent_events(limit.unwrap_or(usize::MAX))?;
            if events.is_empty() {
                println!("No events");
            }
            for event in &events {
                println!("{}", format_event_with_id(event));
            }
        }
    }
    Ok(())
}

/// Print events logged after `last_id`. Returns the id to poll from next.
pub(crate) fn poll(db: &Database, last_id: i64, id: Option<&str>) -> Result<i64> {
    let events = db.events_after(last_id, id)?;
    debug!(after = last_id, new = events.len(), "polled event log");
    let mut next = last_id;
    for event in &events {
        println!("{}", format_event_with_id(event));
        next = next.max(event.id);
    }
    Ok(next)
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
