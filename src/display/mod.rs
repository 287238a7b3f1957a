//! Output formatting for the CLI: colored badges, single-line issue and
//! user summaries, and relative timestamps.

use jiff::Timestamp;
use owo_colors::OwoColorize;

use crate::issue::Issue;
use crate::types::{AccountStatus, IssueStatus, Severity};
use crate::user::User;

pub fn format_status_colored(status: IssueStatus) -> String {
    let badge = format!("[{}]", status);
    match status {
        IssueStatus::Reported => badge.yellow().to_string(),
        IssueStatus::Assigned => badge.magenta().to_string(),
        IssueStatus::InProgress => badge.cyan().to_string(),
        IssueStatus::Resolved => badge.green().to_string(),
        IssueStatus::Closed => badge.dimmed().to_string(),
    }
}

pub fn format_severity_colored(severity: Severity) -> String {
    let badge = format!("[{}]", severity);
    match severity {
        Severity::Critical => badge.red().to_string(),
        Severity::High => badge.yellow().to_string(),
        Severity::Medium => badge.blue().to_string(),
        Severity::Low => badge.dimmed().to_string(),
    }
}

pub fn format_account_status_colored(status: AccountStatus) -> String {
    let badge = format!("[{}]", status);
    match status {
        AccountStatus::Active => badge.green().to_string(),
        AccountStatus::Pending => badge.yellow().to_string(),
        AccountStatus::Inactive => badge.dimmed().to_string(),
    }
}

/// Format an issue for single-line display with colors.
pub fn format_issue_line(issue: &Issue) -> String {
    let id = format!("#{:<4}", issue.id);
    format!(
        "{} {}{} {} - {} ({} votes)",
        id.cyan(),
        format_severity_colored(issue.severity),
        format_status_colored(issue.status),
        issue.title,
        issue.location,
        issue.upvotes,
    )
}

/// Format an issue as a bullet point (for show command sections).
pub fn format_issue_bullet(issue: &Issue) -> String {
    let id = format!("#{}", issue.id);
    let distance = issue
        .distance_km
        .map(|d| format!(" ({d:.1} km away)"))
        .unwrap_or_default();
    format!("- {} [{}] {}{}", id.cyan(), issue.status, issue.title, distance)
}

/// Format a user for single-line display with colors.
pub fn format_user_line(user: &User) -> String {
    let id = format!("#{:<4}", user.id);
    let verified = if user.verified { "" } else { " (unverified)" };
    format!(
        "{} {} {} <{}> - {}{}",
        id.cyan(),
        format_account_status_colored(user.status),
        user.name,
        user.email,
        user.profile.role(),
        verified,
    )
}

/// Human-friendly relative timestamp, e.g. "5 hours ago".
pub fn format_relative_time(ts: Timestamp) -> String {
    let elapsed = ts.duration_until(Timestamp::now());
    let secs = elapsed.as_secs();
    if secs < 60 {
        return "just now".to_string();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(hours / 24, "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
