// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manual notifications and read receipts.

use tracing::info;
use ward_core::{Audience, Database, Notification};

use crate::cli::{NotifyCommand, OutputFormat};
use crate::display::format_notification_line;
use crate::error::Result;
use crate::validate::{required, MAX_NOTIFICATION_BODY_LENGTH, MAX_NOTIFICATION_TITLE_LENGTH};

use super::open_db;

/// Default number of notifications shown without `--limit`.
pub const DEFAULT_LIMIT: usize = 20;

pub fn run(cmd: NotifyCommand) -> Result<()> {
    let (db, _, _) = open_db()?;
    match cmd {
        NotifyCommand::Send {
            title,
            body,
            audience,
        } => send_impl(&db, &title, &body, &audience).map(|_| ()),
        NotifyCommand::List { limits, output } => {
            list_impl(&db, limits.resolve(DEFAULT_LIMIT), output)
        }
        NotifyCommand::Read { id } => read_impl(&db, id).map(|_| ()),
    }
}

pub(crate) fn send_impl(
    db: &Database,
    title: &str,
    body: &str,
    audience: &str,
) -> Result<Notification> {
    let title = required("Title", title, MAX_NOTIFICATION_TITLE_LENGTH)?;
    let body = required("Body", body, MAX_NOTIFICATION_BODY_LENGTH)?;
    let audience: Audience = audience.parse()?;

    let sent = db.send_notification(&title, &body, audience, None)?;
    info!(
        notification = sent.id,
        audience = %sent.audience,
        recipients = sent.recipients,
        "sent notification"
    );
    println!(
        "Sent #{} to {} ({} recipient(s))",
        sent.id, sent.audience, sent.recipients
    );
    Ok(sent)
}

pub(crate) fn list_impl(db: &Database, limit: Option<usize>, output: OutputFormat) -> Result<()> {
    let notifications = db.list_notifications(limit.unwrap_or(usize::MAX))?;
    match output {
        OutputFormat::Text => {
            if notifications.is_empty() {
                println!("No notifications");
            }
            for n in &notifications {
                println!("{}", format_notification_line(n));
            }
        }
        OutputFormat::Id => {
            for n in &notifications {
                println!("{}", n.id);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&notifications)?),
    }
    Ok(())
}

pub(crate) fn read_impl(db: &Database, id: i64) -> Result<Notification> {
    let n = db.mark_notification_read(id)?;
    println!(
        "#{}: {}/{} read ({}%)",
        n.id,
        n.reads,
        n.recipients,
        n.read_rate()
    );
    Ok(n)
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
