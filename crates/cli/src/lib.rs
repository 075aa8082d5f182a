// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wardrs - the library behind the `ward` civic issue admin CLI.
//!
//! Staff record and import citizen-reported issues, triage them through
//! `open -> in_progress -> resolved`, route them to departments (by hand or
//! by keyword), notify users and review analytics. Everything is stored in
//! a SQLite database managed by [`ward_core::Database`].
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - the clap command-line definition
//! - [`run`] - executes a parsed command
//! - [`Config`] - project configuration in `.ward/config.toml`
//! - [`Error`] - CLI errors, wrapping [`ward_core::Error`]
//!
//! ```rust,ignore
//! use clap::Parser;
//! let cli = wardrs::Cli::parse_from(["ward", "list", "-p", "critical"]);
//! wardrs::run(cli.command)?;
//! ```

mod automation;
mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
mod logging;
mod schema;
pub mod timings;
mod validate;

pub mod config;
pub mod error;
pub mod id;

pub use cli::{
    Cli, Command, ContactArgs, DeptCommand, FilterArgs, LimitArgs, NotifyCommand, OutputFormat,
    RuleCommand, SchemaCommand, TemplateCommand, UserCommand,
};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};
pub use logging::setup_logging;

use clap::CommandFactory;
use clap_complete::generate;

use commands::new::NewIssue;
use commands::stats::StatsOverrides;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            prefix,
            path,
            workspace,
        } => commands::init::run(prefix, path, workspace),
        Command::New {
            title,
            description,
            category,
            priority,
            address,
            lat,
            lng,
            reporter,
            department,
            output,
        } => commands::new::run(
            NewIssue {
                title,
                description,
                category,
                priority,
                address,
                latitude: lat,
                longitude: lng,
                reporter,
                department,
            },
            output,
        ),
        Command::List {
            filters,
            limits,
            all,
            output,
        } => commands::list::run(&filters, &limits, all, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Status { args, reason } => commands::status::run(&args, reason.as_deref()),
        Command::Start { ids, reason } => commands::status::start(&ids, reason.as_deref()),
        Command::Resolve { ids, reason } => commands::status::resolve(&ids, reason.as_deref()),
        Command::Reopen { ids, reason } => commands::status::reopen(&ids, reason.as_deref()),
        Command::Priority { args } => commands::priority::run(&args),
        Command::Assign { args, auto } => commands::assign::run(&args, auto),
        Command::Unassign { ids } => commands::assign::unassign(&ids),
        Command::AutoAssign { dry_run } => commands::assign::auto_assign(dry_run),
        Command::Note { id, content } => commands::note::run(&id, &content),
        Command::Edit { id, field, value } => commands::edit::run(&id, &field, &value),
        Command::Log { id, limits, follow } => commands::log::run(
            id.as_deref(),
            limits.resolve(commands::log::DEFAULT_LIMIT),
            follow,
        ),
        Command::Dept(cmd) => commands::dept::run(cmd),
        Command::User(cmd) => commands::user::run(cmd),
        Command::Notify(cmd) => commands::notify::run(cmd),
        Command::Template(cmd) => commands::template::run(cmd),
        Command::Rule(cmd) => commands::rule::run(cmd),
        Command::Stats {
            filters,
            window,
            trend,
            area,
            output,
        } => commands::stats::run(
            &filters,
            StatsOverrides {
                window_days: window,
                trend_days: trend,
                areas: area,
            },
            output,
        ),
        Command::Import {
            file,
            input,
            dry_run,
        } => commands::import::run(file, input, dry_run),
        Command::Export { filepath } => commands::export::run(&filepath),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ward", &mut std::io::stdout());
            Ok(())
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
