// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ward-core: Shared library for the ward civic issue admin tool
//!
//! This crate provides the data model, the SQLite store, keyword-based
//! department matching, analytics aggregation and automation-rule matching
//! used by the ward CLI.

pub mod analytics;
pub mod db;
pub mod department;
pub mod error;
pub mod filter;
pub mod issue;
pub mod matcher;
pub mod notification;
pub mod rule;
pub mod user;

pub use db::{Database, Recount};
pub use department::Department;
pub use error::{Error, Result};
pub use filter::IssueFilter;
pub use issue::{Action, Event, Field, Issue, Note, Priority, Status};
pub use notification::{Audience, Notification, Template};
pub use rule::{AutomationRule, Trigger};
pub use user::{Role, Source, User, UserStatus};
