use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::reports::{DateRange, VALID_DATE_RANGES};
use crate::types::{
    Category, FileFormat, ReportKind, Severity, VALID_CATEGORIES, VALID_FORMATS,
    VALID_REPORT_KINDS, VALID_SEVERITIES,
};

#[derive(Parser)]
#[command(name = "civic-connect")]
#[command(about = "Citizen civic-issue reporting portal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List community issues with client-side filters
    #[command(visible_alias = "ls")]
    Issues {
        /// Free-text search over title, description, and location
        #[arg(short, long)]
        query: Option<String>,

        /// Category filter ('all' disables it)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Status filter ('all' disables it)
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Severity filter ('all' disables it)
        #[arg(long, default_value = "all")]
        severity: String,

        /// Render as a table instead of one line per issue
        #[arg(short, long)]
        table: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display one issue with its thread, trail, and AI prediction
    #[command(visible_alias = "s")]
    Show {
        /// Issue id
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// File a new issue report
    Report {
        /// Short issue title
        title: String,

        /// What happened and where
        #[arg(short, long)]
        description: String,

        /// Street address or landmark
        #[arg(short, long)]
        location: String,

        /// Issue category (required unless --analyze fills it in)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Severity (default: medium)
        #[arg(long, value_parser = parse_severity)]
        severity: Option<Severity>,

        /// Path to a photo of the issue
        #[arg(long)]
        photo: Option<String>,

        /// Reporter name shown on the issue
        #[arg(long, default_value = "Anonymous")]
        reporter: String,

        /// Let the AI classify category and severity from the description
        #[arg(long)]
        analyze: bool,

        /// Output the created issue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Vote on a community issue
    #[command(visible_alias = "v")]
    Vote {
        /// Issue id to vote on; omit to only search nearby issues
        id: Option<u32>,

        /// Comment to attach with the vote
        #[arg(short = 'm', long)]
        comment: Option<String>,

        /// Search for similar issues near this location first
        #[arg(long)]
        near: Option<String>,

        /// Voter name shown on attached comments
        #[arg(long, default_value = "Anonymous")]
        voter: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign in to the portal
    Login {
        /// Account email address
        email: String,

        /// Account password (any value is accepted)
        #[arg(short, long)]
        password: String,

        /// Output the session as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register an administrator account
    Register {
        /// Full name
        name: String,

        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Government department
        #[arg(short, long)]
        department: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        confirm_password: String,

        /// Accept the terms and conditions
        #[arg(long)]
        agree_terms: bool,

        /// Output the session as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered users (admin view)
    Users {
        /// Free-text search over name and email
        #[arg(short, long)]
        query: Option<String>,

        /// Role filter ('all' disables it)
        #[arg(short, long, default_value = "all")]
        role: String,

        /// Account status filter ('all' disables it)
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Render as a table instead of one line per user
        #[arg(short, long)]
        table: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the AI analysis over a description
    Analyze {
        /// Free-text issue description
        description: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the support assistant a question
    Chat {
        /// Message for the assistant
        message: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an analytics report export
    Export {
        /// Report type
        #[arg(short, long, default_value = "issues-summary", value_parser = parse_report_kind)]
        kind: ReportKind,

        /// Export format: pdf, xlsx, csv
        #[arg(short, long, default_value = "pdf", value_parser = parse_format)]
        format: FileFormat,

        /// Reporting window
        #[arg(long, default_value = "last-30-days", value_parser = parse_date_range)]
        range: DateRange,

        /// Restrict to these categories (repeatable; default: all)
        #[arg(short, long, value_parser = parse_category)]
        category: Vec<Category>,

        /// Restrict to one location
        #[arg(long)]
        location: Option<String>,

        /// Leave charts out of the export
        #[arg(long)]
        no_charts: bool,

        /// Include raw data tables
        #[arg(long)]
        raw_data: bool,

        /// Show the on-screen preview instead of exporting
        #[arg(short, long)]
        preview: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn parse_with_validation<T>(
    s: &str,
    parse: impl Fn(&str) -> Result<T, String>,
    what: &str,
    valid: &[&str],
) -> Result<T, String> {
    parse(s).map_err(|_| format!("Invalid {what} '{s}'. Valid values: {}", valid.join(", ")))
}

fn parse_category(s: &str) -> Result<Category, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "category",
        VALID_CATEGORIES,
    )
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "severity",
        VALID_SEVERITIES,
    )
}

fn parse_format(s: &str) -> Result<FileFormat, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "format",
        VALID_FORMATS,
    )
}

fn parse_report_kind(s: &str) -> Result<ReportKind, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "report kind",
        VALID_REPORT_KINDS,
    )
}

fn parse_date_range(s: &str) -> Result<DateRange, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "date range",
        VALID_DATE_RANGES,
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "civic-connect", &mut io::stdout());
}
