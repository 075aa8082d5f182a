// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{list, show, stats};
use schemars::schema::RootSchema;
use schemars::schema_for;

pub(crate) fn schema(cmd: &SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::List => schema_for!(list::ListOutputJson),
        SchemaCommand::Show => schema_for!(show::IssueDetails),
        SchemaCommand::Stats => schema_for!(stats::StatsOutputJson),
    }
}

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(&cmd))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
