use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::display::format_issue_line;
use crate::error::Result;
use crate::query::IssueQuery;
use crate::store::SessionStore;

/// A row in the issue list table.
#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Id")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Votes")]
    votes: u32,
}

/// List community issues, filtered client-side.
pub async fn cmd_issues(
    query: Option<&str>,
    category: &str,
    status: &str,
    severity: &str,
    table: bool,
    output: OutputOptions,
) -> Result<()> {
    let config = Config::load()?;
    let store = SessionStore::seeded();
    let issues = store.all_issues();

    let filter = IssueQuery::from_strings(
        query.unwrap_or(""),
        Some(category),
        Some(status),
        Some(severity),
    )?;
    let matched = filter.apply(&issues);

    if output.json {
        return print_json(&matched);
    }

    println!("{}\n", config.site.title.bold());

    if matched.is_empty() {
        println!("No issues match the current filters.");
        return Ok(());
    }

    if table {
        let rows: Vec<IssueRow> = matched
            .iter()
            .map(|i| IssueRow {
                id: i.id,
                title: i.title.clone(),
                category: i.category.to_string(),
                status: i.status.to_string(),
                severity: i.severity.to_string(),
                votes: i.upvotes,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{table}");
    } else {
        for issue in &matched {
            println!("{}", format_issue_line(issue));
        }
    }

    println!("\n{} of {} issues shown", matched.len(), issues.len());
    Ok(())
}
