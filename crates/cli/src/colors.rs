// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output and issue listings.
//!
//! `NO_COLOR=1` disables colors; `COLOR=1` forces them without a TTY.

use std::io::IsTerminal;

use ward_core::Priority;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and hints: medium grey
    pub const CONTEXT: u8 = 245;
    /// Critical priority: red
    pub const CRITICAL: u8 = 167;
    /// High priority: amber
    pub const HIGH: u8 = 179;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
}

/// Section header color.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Command and option color.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Placeholder and hint color.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Priority label for list output; only high and critical stand out.
pub fn priority(p: Priority) -> String {
    if !should_colorize() {
        return p.to_string();
    }
    match p {
        Priority::Critical => paint(codes::CRITICAL, p.as_str()),
        Priority::High => paint(codes::HIGH, p.as_str()),
        Priority::Medium | Priority::Low => p.to_string(),
    }
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. Lines of the form
/// `  ward cmd <arg>    Description` get the command part highlighted.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut out = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            out.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            out.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            out.push(line.to_string());
        }
    }
    out.join("\n")
}

/// Highlight a command line: quoted strings and `<placeholders>` dim, the rest bright.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut plain = String::new();
    let mut chars = cmd.chars();

    let flush = |plain: &mut String, result: &mut String| {
        if !plain.is_empty() {
            result.push_str(&literal(plain));
            plain.clear();
        }
    };

    while let Some(c) = chars.next() {
        let close = match c {
            '"' => '"',
            '<' => '>',
            _ => {
                plain.push(c);
                continue;
            }
        };
        flush(&mut plain, &mut result);
        let mut quoted = String::from(c);
        for next in chars.by_ref() {
            quoted.push(next);
            if next == close {
                break;
            }
        }
        result.push_str(&context(&quoted));
    }
    flush(&mut plain, &mut result);
    result
}

/// Byte offset where the description starts (the first run of 2+ spaces).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    if rest.trim().is_empty() {
        return None;
    }
    Some(start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
