// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ward_core::analytics::{Count, Delta, Summary};
use ward_core::{
    Action, AutomationRule, Department, Event, Issue, Note, Notification, Status, Template, User,
};

use crate::colors;

/// Maximum line width for wrapped note content (excluding indent).
const WRAP_WIDTH: usize = 96;

/// Longest note excerpt shown in a log line.
const NOTE_EXCERPT: usize = 50;

/// Section label for notes written while an issue was in `status`.
pub fn note_section_label(status: Status) -> &'static str {
    match status {
        Status::Open => "Triage",
        Status::InProgress => "Progress",
        Status::Resolved => "Resolution",
    }
}

/// Wrap single-line text at word boundaries; multi-line text is kept as written.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Format a note as a timestamp line followed by indented content.
pub fn format_note(note: &Note) -> Vec<String> {
    let mut lines = vec![format!("  {}", note.created_at.format("%Y-%m-%d %H:%M"))];
    for line in wrap_text(&note.content, WRAP_WIDTH).lines() {
        lines.push(format!("    {}", line));
    }
    lines
}

/// One line per issue in `list` output.
pub fn format_issue_line(issue: &Issue) -> String {
    let state = match &issue.department {
        Some(dept) => format!("{}, {}", issue.status, dept),
        None => issue.status.to_string(),
    };
    format!(
        "- [{}] ({}) {}: {}",
        colors::priority(issue.priority),
        state,
        issue.id,
        issue.title
    )
}

/// Full issue details for `show`.
pub fn format_issue_details(issue: &Issue, notes: &[(Status, Vec<Note>)], events: &[Event]) -> String {
    let mut output = vec![
        format!("[{}] {}", issue.priority, issue.id),
        format!("Title: {}", issue.title),
        format!("Status: {}", issue.status),
        format!("Category: {}", issue.category),
    ];
    if !issue.address.is_empty() {
        output.push(format!("Address: {}", issue.address));
    }
    if let Some((lat, lng)) = issue.coordinates() {
        output.push(format!("Location: {:.6}, {:.6}", lat, lng));
    }
    output.push(format!(
        "Department: {}",
        issue.department.as_deref().unwrap_or("(unassigned)")
    ));
    if let Some(reporter) = &issue.reporter {
        output.push(format!("Reporter: {}", reporter));
    }
    output.push(format!(
        "Reported: {}",
        issue.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push(format!(
        "Updated: {}",
        issue.updated_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(resolved) = issue.resolved_at {
        output.push(format!("Resolved: {}", resolved.format("%Y-%m-%d %H:%M")));
    }

    if let Some(desc) = issue.description.as_deref().filter(|d| !d.is_empty()) {
        output.push(String::new());
        output.push("Description:".to_string());
        for line in wrap_text(desc, WRAP_WIDTH).lines() {
            output.push(format!("    {}", line));
        }
    }

    for (status, status_notes) in notes {
        if status_notes.is_empty() {
            continue;
        }
        output.push(String::new());
        output.push(format!("{}:", note_section_label(*status)));
        for (i, note) in status_notes.iter().enumerate() {
            if i > 0 {
                output.push(String::new());
            }
            output.extend(format_note(note));
        }
    }

    // The creation event repeats the Reported line.
    let history: Vec<_> = events
        .iter()
        .filter(|e| e.action != Action::Created)
        .collect();
    if !history.is_empty() {
        output.push(String::new());
        output.push("Log:".to_string());
        for event in history {
            output.push(format_event(event));
        }
    }

    output.join("\n")
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= NOTE_EXCERPT {
        return text.to_string();
    }
    let cut: String = text.chars().take(NOTE_EXCERPT - 3).collect();
    format!("{cut}...")
}

fn describe_event(event: &Event) -> String {
    let old = event.old_value.as_deref();
    let new = event.new_value.as_deref();
    let mut text = event.action.to_string();
    match event.action {
        Action::StatusChanged | Action::Prioritized => {
            if let (Some(old), Some(new)) = (old, new) {
                text.push_str(&format!(" {} -> {}", old, new));
            }
        }
        Action::Edited => {
            if let Some(new) = new {
                text.push_str(&format!(" -> {}", excerpt(new)));
            }
        }
        Action::Assigned => {
            if let Some(new) = new {
                text.push_str(&format!(" to {}", new));
            }
            if let Some(old) = old {
                text.push_str(&format!(" (was {})", old));
            }
        }
        Action::Unassigned => {
            if let Some(old) = old {
                text.push_str(&format!(" (was {})", old));
            }
        }
        Action::Noted => {
            if let Some(new) = new {
                text.push_str(&format!(" \"{}\"", excerpt(new)));
            }
        }
        Action::Created | Action::Resolved | Action::Reopened => {}
    }
    if let Some(reason) = &event.reason {
        text.push_str(&format!(" [{}]", reason));
    }
    text
}

/// Format a single event for an issue's history.
pub fn format_event(event: &Event) -> String {
    format!(
        "  {}  {}",
        event.created_at.format("%Y-%m-%d %H:%M"),
        describe_event(event)
    )
}

/// Format an event with its issue ID (for the global log).
pub fn format_event_with_id(event: &Event) -> String {
    format!(
        "  {}  {} {}",
        event.created_at.format("%Y-%m-%d %H:%M"),
        event.issue_id,
        describe_event(event)
    )
}

/// One line per department in `dept list` output.
pub fn format_department_line(position: usize, dept: &Department) -> String {
    let keywords = if dept.keywords.is_empty() {
        "-".to_string()
    } else {
        dept.keywords.join(", ")
    };
    format!(
        "{}. {} ({} assigned, {} resolved) [{}]",
        position, dept.name, dept.issues_assigned, dept.issues_resolved, keywords
    )
}

/// Department details for `dept show`.
pub fn format_department_details(dept: &Department) -> String {
    let mut output = vec![format!("Department: {}", dept.name)];
    let contact = [
        ("Head", &dept.head),
        ("Email", &dept.email),
        ("Phone", &dept.phone),
        ("Hours", &dept.working_hours),
    ];
    for (label, value) in contact {
        if let Some(value) = value {
            output.push(format!("{}: {}", label, value));
        }
    }
    output.push(format!("Keywords: {}", dept.keywords.join(", ")));
    output.push(format!("Assigned: {}", dept.issues_assigned));
    output.push(format!("Resolved: {}", dept.issues_resolved));
    output.join("\n")
}

/// One line per user in `user list` output.
pub fn format_user_line(user: &User) -> String {
    format!(
        "- {} <{}> {} ({}, {}, {}) reported {}",
        user.id,
        user.email,
        user.display_name,
        user.role,
        user.status,
        user.source,
        user.issues_reported
    )
}

/// User details for `user show`.
pub fn format_user_details(user: &User) -> String {
    let mut output = vec![
        format!("User: {}", user.id),
        format!("Name: {}", user.display_name),
        format!("Email: {}", user.email),
        format!("Role: {}", user.role),
        format!("Status: {}", user.status),
        format!("Source: {}", user.source),
        format!("Issues reported: {}", user.issues_reported),
        format!("Joined: {}", user.created_at.format("%Y-%m-%d")),
    ];
    if let Some(active) = user.last_active {
        output.push(format!("Last active: {}", active.format("%Y-%m-%d %H:%M")));
    }
    output.join("\n")
}

/// One line per notification in `notify list` output.
pub fn format_notification_line(n: &Notification) -> String {
    let origin = n
        .rule
        .as_ref()
        .map(|r| format!(" via {}", r))
        .unwrap_or_default();
    format!(
        "- #{} [{}] {} ({}/{} read, {}%){} {}",
        n.id,
        n.audience,
        n.title,
        n.reads,
        n.recipients,
        n.read_rate(),
        origin,
        n.created_at.format("%Y-%m-%d %H:%M")
    )
}

/// One line per template in `template list` output.
pub fn format_template_line(t: &Template) -> String {
    format!("- {}: {}", t.name, t.title)
}

/// One line per rule in `rule list` output.
pub fn format_rule_line(rule: &AutomationRule) -> String {
    let condition = if rule.condition.trim().is_empty() {
        "(always)"
    } else {
        rule.condition.as_str()
    };
    format!(
        "- {} [{}] on {} if {} -> {} to {}",
        rule.name,
        if rule.enabled { "enabled" } else { "disabled" },
        rule.trigger,
        condition,
        rule.template,
        rule.audience
    )
}

fn format_delta(label: &str, delta: &Delta) -> String {
    format!(
        "  {}: {} (previous {}, {:+}%)",
        label, delta.current, delta.previous, delta.change
    )
}

fn format_counts(output: &mut Vec<String>, title: &str, counts: &[Count]) {
    if counts.is_empty() {
        return;
    }
    output.push(String::new());
    output.push(format!("{}:", title));
    let width = counts.iter().map(|c| c.key.len()).max().unwrap_or(0);
    for c in counts {
        output.push(format!("  {:<width$}  {}", c.key, c.count, width = width));
    }
}

/// Analytics summary for `stats`.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = vec![
        format!(
            "Issues: {} total, {} open, {} in progress, {} resolved",
            summary.total, summary.open, summary.in_progress, summary.resolved
        ),
        format!("Resolution rate: {}%", summary.resolution_rate),
    ];
    if let Some(hours) = summary.avg_resolution_hours {
        output.push(format!("Average resolution: {:.1}h", hours));
    }

    output.push(String::new());
    output.push(format!("Last {} days:", summary.window_days));
    output.push(format_delta("Reported", &summary.reported_window));
    output.push(format_delta("Resolved", &summary.resolved_window));

    format_counts(&mut output, "By status", &summary.by_status);
    format_counts(&mut output, "By priority", &summary.by_priority);
    format_counts(&mut output, "By category", &summary.by_category);
    format_counts(&mut output, "By department", &summary.by_department);
    format_counts(&mut output, "By location", &summary.by_location);

    if !summary.trend.is_empty() {
        output.push(String::new());
        output.push("Daily trend (reported/resolved):".to_string());
        for day in &summary.trend {
            output.push(format!(
                "  {}  {}/{}",
                day.date.format("%Y-%m-%d"),
                day.reported,
                day.resolved
            ));
        }
    }

    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
