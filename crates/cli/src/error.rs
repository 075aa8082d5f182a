// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors surfaced by the ward CLI.
///
/// Store and model errors come from `ward_core` and are shown unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'ward init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("workspace not found: {0}\n  hint: the workspace directory must exist before it is used")]
    WorkspaceNotFound(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("line {line}: {reason}")]
    ParseLineError { line: usize, reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("some operations failed: {succeeded} succeeded, {failed} failed")]
    PartialBulkFailure { succeeded: usize, failed: usize },

    #[error(transparent)]
    Core(#[from] ward_core::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
