// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword-based department matching for auto-assignment.
//!
//! An issue goes to the first department, in list order, that has a keyword
//! occurring in the issue text. Matching is a case-insensitive substring test.

use crate::department::Department;
use crate::issue::Issue;

/// A department chosen by the matcher together with the keyword that fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub department: &'a Department,
    pub keyword: &'a str,
}

impl Match<'_> {
    /// Event reason recorded for an automatic assignment.
    pub fn reason(&self) -> String {
        format!("auto: keyword '{}'", self.keyword)
    }
}

/// Find the first department with a keyword contained in `text`.
pub fn matching_keyword<'a>(text: &str, departments: &'a [Department]) -> Option<Match<'a>> {
    let text = text.to_lowercase();
    departments.iter().find_map(|department| {
        department
            .keywords
            .iter()
            .map(|kw| kw.trim())
            .find(|kw| !kw.is_empty() && text.contains(&kw.to_lowercase()))
            .map(|keyword| Match {
                department,
                keyword,
            })
    })
}

/// Find the department an issue text should be assigned to.
pub fn match_department<'a>(text: &str, departments: &'a [Department]) -> Option<&'a Department> {
    matching_keyword(text, departments).map(|m| m.department)
}

/// Match an issue using its title, description and category.
pub fn match_issue<'a>(issue: &Issue, departments: &'a [Department]) -> Option<Match<'a>> {
    matching_keyword(&issue.matcher_text(), departments)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
