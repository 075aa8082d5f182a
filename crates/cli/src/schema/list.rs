// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `ward list` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::IssueJson;

/// JSON output structure for the list command.
#[derive(JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// Issues matching the query, highest priority first.
    pub issues: Vec<IssueJson>,
    /// Number of matching issues before the limit was applied.
    pub total: usize,
    /// Maximum number of results requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}
