// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{FilterArgs, LimitArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "ward")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Triage, assign and resolve citizen-reported civic issues")]
#[command(
    long_about = "Triage, assign and resolve citizen-reported civic issues.\n\n\
    Manage departments and keyword auto-assignment, platform users, notifications, \
    automation rules and analytics from a local store."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// The unit type field is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if ward was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Issue triage
    // ─────────────────────────────────────────────────────────────────────────
    /// Record a new issue (e.g. one phoned in to staff)
    #[command(after_help = colors::examples("\
Examples:
  ward new \"Pothole on Elm St\"                   Create with defaults
  ward new \"Leak\" -c water -p high -a \"5 Oak Ave\"  Set category, priority, address
  ward new \"Dark street\" --lat 40.7 --lng -74.0   Attach coordinates
  ward new \"Graffiti\" --department Parks          Assign explicitly
  ward new \"Trash\" -r u-123 -o id                 Set reporter, print only the ID"))]
    New {
        /// Issue title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Longer description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Category (default: other)
        #[arg(long, short)]
        category: Option<String>,

        /// Priority: low, medium, high, critical (default: medium)
        #[arg(long, short)]
        priority: Option<String>,

        /// Street address
        #[arg(long, short)]
        address: Option<String>,

        /// Latitude (requires --lng)
        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,

        /// Longitude (requires --lat)
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,

        /// Reporting user id
        #[arg(long, short)]
        reporter: Option<String>,

        /// Assign to a department instead of keyword matching
        #[arg(long)]
        department: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List issues (active issues by default)
    #[command(after_help = colors::examples("\
Examples:
  ward list                        Open and in-progress issues
  ward list --all                  Include resolved issues
  ward list -p high,critical       High or critical priority
  ward list -c pothole -d Roads    Potholes assigned to Roads
  ward list --unassigned           Issues without a department
  ward list -q \"main st\"           Text search
  ward list --near Downtown        Address contains Downtown
  ward list --since 7d             Reported in the last week
  ward list -o json                JSON output

Sort: priority (critical first), then newest first."))]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        limits: LimitArgs,

        /// Include resolved issues
        #[arg(long, conflicts_with = "status")]
        all: bool,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show issue details with notes and history
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue ID (unique prefixes of 3+ characters are accepted)
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Set the status of issue(s)
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ward status city-1a2b in_progress             Start work
  ward status city-1a2b city-3c4d resolved      Resolve two issues
  ward status city-1a2b open -r \"not fixed\"     Reopen with a reason")
    )]
    Status {
        /// Issue ID(s) followed by the status (open, in_progress, resolved)
        #[arg(required = true, num_args = 2.., value_name = "IDS... STATUS")]
        args: Vec<String>,

        /// Reason recorded on the event
        #[arg(long, short)]
        reason: Option<String>,
    },

    /// Mark issue(s) in progress
    #[command(arg_required_else_help = true)]
    Start {
        #[arg(required = true)]
        ids: Vec<String>,

        /// Reason recorded on the event
        #[arg(long, short)]
        reason: Option<String>,
    },

    /// Mark issue(s) resolved
    #[command(arg_required_else_help = true)]
    Resolve {
        #[arg(required = true)]
        ids: Vec<String>,

        /// Resolution summary, also added as a note
        #[arg(long, short)]
        reason: Option<String>,
    },

    /// Return issue(s) to open
    #[command(arg_required_else_help = true)]
    Reopen {
        #[arg(required = true)]
        ids: Vec<String>,

        /// Reason recorded on the event
        #[arg(long, short)]
        reason: Option<String>,
    },

    /// Set the priority of issue(s)
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ward priority city-1a2b critical           Escalate one issue
  ward priority city-1a2b city-3c4d low      Lower two issues")
    )]
    Priority {
        /// Issue ID(s) followed by the priority (low, medium, high, critical)
        #[arg(required = true, num_args = 2.., value_name = "IDS... PRIORITY")]
        args: Vec<String>,
    },

    /// Assign issue(s) to a department
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ward assign city-1a2b Roads               Assign to Roads
  ward assign city-1a2b city-3c4d Water     Assign two issues
  ward assign --auto city-1a2b              Assign by keyword match")
    )]
    Assign {
        /// Issue ID(s) followed by the department (IDs only with --auto)
        #[arg(required = true, value_name = "IDS... DEPARTMENT")]
        args: Vec<String>,

        /// Pick the department by keyword match
        #[arg(long)]
        auto: bool,
    },

    /// Remove the department from issue(s)
    #[command(arg_required_else_help = true)]
    Unassign {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Assign every open, unassigned issue by keyword match
    AutoAssign {
        /// Show matches without assigning
        #[arg(long)]
        dry_run: bool,
    },

    /// Add an admin note to an issue
    #[command(arg_required_else_help = true)]
    Note {
        /// Issue ID
        id: String,

        /// Note content
        #[arg(value_parser = non_empty_string)]
        content: String,
    },

    /// Edit an issue field
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ward edit city-1a2b title \"Deep pothole\"    Change title
  ward edit city-1a2b category roads          Change category
  ward edit city-1a2b address \"12 Elm St\"     Change address
  ward edit city-1a2b description \"\"          Clear description")
    )]
    Edit {
        /// Issue ID
        id: String,

        /// Field: title, description, category, address
        field: String,

        /// New value
        value: String,
    },

    /// Show the event log, optionally following new events
    #[command(after_help = colors::examples("\
Examples:
  ward log                 Recent events across all issues
  ward log city-1a2b       History of one issue
  ward log --follow        Print new events as they happen"))]
    Log {
        /// Limit to one issue
        id: Option<String>,

        #[command(flatten)]
        limits: LimitArgs,

        /// Keep polling for new events until interrupted
        #[arg(long, short)]
        follow: bool,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage departments
    #[command(subcommand)]
    Dept(DeptCommand),

    /// Manage platform users
    #[command(subcommand)]
    User(UserCommand),

    /// Send and track notifications
    #[command(subcommand)]
    Notify(NotifyCommand),

    /// Manage notification templates
    #[command(subcommand)]
    Template(TemplateCommand),

    /// Manage automation rules
    #[command(subcommand)]
    Rule(RuleCommand),

    /// Show analytics for issues
    #[command(after_help = colors::examples("\
Examples:
  ward stats                       Overview with 7-day comparison
  ward stats --window 30           Compare the last 30 days to the 30 before
  ward stats -d Roads              Analytics for one department
  ward stats --area Downtown       Count issues by named area
  ward stats -o json               JSON output"))]
    Stats {
        #[command(flatten)]
        filters: FilterArgs,

        /// Comparison window length in days (default from config)
        #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..))]
        window: Option<u32>,

        /// Number of days in the daily trend (default from config)
        #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..=366))]
        trend: Option<u32>,

        /// Named area to count by address (repeatable, overrides config)
        #[arg(long, value_name = "NAME")]
        area: Vec<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize ward in the current directory (or specified path)
    #[command(after_help = colors::examples("\
Examples:
  ward init                        Prefix derived from the directory name
  ward init --prefix city          Custom issue ID prefix
  ward init --workspace ../shared  Keep ward.db in another directory"))]
    Init {
        /// ID prefix for issues (2+ lowercase alphanumeric)
        #[arg(long)]
        prefix: Option<String>,

        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,

        /// Directory holding the database (must exist)
        #[arg(long)]
        workspace: Option<String>,
    },

    /// Import issues from JSONL (one issue per line)
    #[command(after_help = colors::examples("\
Examples:
  ward import reports.jsonl            Import from file
  ward import -                        Import from stdin
  ward import --dry-run reports.jsonl  Preview without applying"))]
    Import {
        /// Input file (use '-' for stdin)
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Input file (alternative to positional)
        #[arg(long, short, conflicts_with = "file")]
        input: Option<String>,

        /// Preview changes without applying
        #[arg(long)]
        dry_run: bool,
    },

    /// Export issues with notes and events to JSONL
    #[command(arg_required_else_help = true)]
    Export {
        /// Output file path (use '-' for stdout)
        filepath: String,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ward completion bash > ~/.local/share/bash-completion/completions/ward
  ward completion zsh > ~/.zfunc/_ward
  ward completion fish > ~/.config/fish/completions/ward.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for commands with JSON output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  ward schema list     Schema for 'ward list -o json'
  ward schema show     Schema for 'ward show <id> -o json'
  ward schema stats    Schema for 'ward stats -o json'")
    )]
    Schema(SchemaCommand),
}

/// Department management commands.
#[derive(Subcommand)]
pub enum DeptCommand {
    /// Add a department
    #[command(after_help = colors::examples("\
Examples:
  ward dept add Roads -k pothole,asphalt     Add with keywords
  ward dept add Water --head \"J. Doe\" --phone 555-0100"))]
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Keywords for auto-assignment (comma-separated or repeated)
        #[arg(long, short, value_delimiter = ',')]
        keywords: Vec<String>,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// List departments in match order
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a department
    Show {
        name: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Update contact details (empty value clears a field)
    Edit {
        name: String,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Remove a department, unassigning its issues
    Remove { name: String },

    /// Change a department's keywords
    #[command(after_help = colors::examples("\
Examples:
  ward dept keywords Roads --add sinkhole,curb   Add keywords
  ward dept keywords Roads --remove asphalt      Remove a keyword
  ward dept keywords Roads --clear --add road    Replace all keywords"))]
    Keywords {
        name: String,

        /// Keywords to add (comma-separated or repeated)
        #[arg(long, value_delimiter = ',')]
        add: Vec<String>,

        /// Keywords to remove (comma-separated or repeated)
        #[arg(long, value_delimiter = ',')]
        remove: Vec<String>,

        /// Remove all keywords before adding
        #[arg(long)]
        clear: bool,
    },

    /// Move a department to a 1-based position in match order
    Move {
        name: String,

        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        position: u32,
    },

    /// Rebuild department counters from issues
    Recount,
}

/// Department contact fields shared by `dept add` and `dept edit`.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ContactArgs {
    /// Department head
    #[arg(long)]
    pub head: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Working hours, e.g. "Mon-Fri 08:00-17:00"
    #[arg(long)]
    pub hours: Option<String>,
}

/// User management commands.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a user
    Add {
        /// User id
        #[arg(value_parser = non_empty_string)]
        id: String,

        #[arg(long, value_parser = non_empty_string)]
        email: String,

        /// Display name (defaults to the id)
        #[arg(long)]
        name: Option<String>,

        /// Role: citizen, moderator, admin
        #[arg(long, default_value = "citizen")]
        role: String,

        /// Sign-up source: mobile, web
        #[arg(long, default_value = "mobile")]
        source: String,

        /// Start as pending approval
        #[arg(long)]
        pending: bool,
    },

    /// List users
    List {
        /// Filter by role (comma-separated for OR)
        #[arg(long, value_delimiter = ',')]
        role: Vec<String>,

        /// Filter by status (comma-separated for OR)
        #[arg(long, short, value_delimiter = ',')]
        status: Vec<String>,

        /// Filter by source (comma-separated for OR)
        #[arg(long, value_delimiter = ',')]
        source: Vec<String>,

        /// Text in id, email or name (case-insensitive)
        #[arg(long, short = 'q')]
        search: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a user (by id or email)
    Show {
        user: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Block user(s)
    Block {
        #[arg(required = true)]
        users: Vec<String>,
    },

    /// Unblock user(s)
    Unblock {
        #[arg(required = true)]
        users: Vec<String>,
    },

    /// Approve pending user(s)
    Approve {
        #[arg(required = true)]
        users: Vec<String>,
    },

    /// Change a user's role
    Role { user: String, role: String },
}

/// Notification commands.
#[derive(Subcommand)]
pub enum NotifyCommand {
    /// Send a notification to an audience
    #[command(after_help = colors::examples("\
Examples:
  ward notify send -t \"Water outage\" -b \"Until 5pm\" --audience citizens"))]
    Send {
        #[arg(long, short, value_parser = non_empty_string)]
        title: String,

        #[arg(long, short, value_parser = non_empty_string)]
        body: String,

        /// Audience: all, citizens, moderators, admins
        #[arg(long, default_value = "all")]
        audience: String,
    },

    /// List sent notifications, newest first
    List {
        #[command(flatten)]
        limits: LimitArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Record a read receipt
    Read { id: i64 },
}

/// Notification template commands.
#[derive(Subcommand)]
pub enum TemplateCommand {
    /// Add a template
    #[command(after_help = colors::examples("\
Examples:
  ward template add resolved -t \"Fixed: {title}\" -b \"{id} at {address} was resolved\"

Placeholders: {id} {title} {status} {priority} {category} {department} {address}"))]
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,

        #[arg(long, short, value_parser = non_empty_string)]
        title: String,

        #[arg(long, short, value_parser = non_empty_string)]
        body: String,
    },

    /// List templates
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Remove a template
    Remove { name: String },
}

/// Automation rule commands.
#[derive(Subcommand)]
pub enum RuleCommand {
    /// Add a rule
    #[command(after_help = colors::examples("\
Examples:
  ward rule add fixed --on resolved --template resolved --audience citizens
  ward rule add urgent --on created --if \"-p critical\" --template alert --audience admins

Triggers: created, status_changed, resolved, assigned, prioritized, noted, *
Conditions: -s STATUS -p PRIORITY -c CATEGORY -d DEPARTMENT -k KEYWORD --unassigned"))]
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Trigger event (issue.created, issue.resolved, ..., issue.*)
        #[arg(long = "on", value_name = "EVENT")]
        trigger: String,

        /// Condition flags matched against the issue (empty matches all)
        #[arg(long = "if", value_name = "CONDITION", allow_hyphen_values = true, default_value = "")]
        condition: String,

        /// Template name
        #[arg(long)]
        template: String,

        /// Audience: all, citizens, moderators, admins
        #[arg(long, default_value = "all")]
        audience: String,

        /// Create disabled
        #[arg(long)]
        disabled: bool,
    },

    /// List rules
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Enable a rule
    Enable { name: String },

    /// Disable a rule
    Disable { name: String },

    /// Remove a rule
    Remove { name: String },

    /// Check whether a rule would fire for an issue, without sending
    Test { name: String, issue: String },
}

/// Schema output commands.
#[derive(Subcommand)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'ward list' JSON output
    List,
    /// Output JSON Schema for 'ward show' JSON output
    Show,
    /// Output JSON Schema for 'ward stats' JSON output
    Stats,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
