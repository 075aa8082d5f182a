// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level help text with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the help color conventions.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with a colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Command groups shown before options in main help.
pub fn commands() -> String {
    let section = |title: &str, rows: &[(&str, &str)]| {
        let mut out = colors::header(title);
        for (name, about) in rows {
            let pad = " ".repeat(12usize.saturating_sub(name.len()));
            out.push_str(&format!("\n  {}{pad}{about}", colors::literal(name)));
        }
        out
    };

    [
        section(
            "Issue Triage:",
            &[
                ("new", "Record a new issue"),
                ("list", "List and filter issues"),
                ("show", "Show issue details"),
                ("status", "Change issue status"),
                ("start", "Mark issue(s) in progress"),
                ("resolve", "Mark issue(s) resolved"),
                ("reopen", "Return issue(s) to open"),
                ("priority", "Change issue priority"),
                ("assign", "Assign issue(s) to a department"),
                ("unassign", "Clear issue department"),
                ("auto-assign", "Assign open issues by keyword"),
                ("note", "Add an admin note"),
                ("edit", "Edit an issue field"),
                ("log", "View or follow the event log"),
            ],
        ),
        section(
            "Administration:",
            &[
                ("dept", "Manage departments"),
                ("user", "Manage users"),
                ("notify", "Send and track notifications"),
                ("template", "Manage notification templates"),
                ("rule", "Manage automation rules"),
                ("stats", "Show analytics"),
            ],
        ),
        section(
            "Setup:",
            &[
                ("init", "Initialize ward"),
                ("import", "Import issues from JSONL"),
                ("export", "Export issues to JSONL"),
                ("schema", "Output JSON Schema for commands"),
                ("completion", "Generate shell completions"),
            ],
        ),
    ]
    .join("\n\n")
}

/// Quickstart shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  ward init --prefix city               Initialize tracker
  ward dept add Roads -k pothole,asphalt  Add a department
  ward import reports.jsonl             Import citizen reports
  ward list                             List active issues
  ward resolve <id>                     Mark an issue resolved",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
