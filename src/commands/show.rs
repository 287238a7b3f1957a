use owo_colors::OwoColorize;

use crate::ai::AiService;
use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::display::{format_relative_time, format_severity_colored, format_status_colored};
use crate::error::Result;
use crate::store::SessionStore;

/// Display one issue with its discussion thread, status trail, and a
/// simulated resolution prediction.
pub async fn cmd_show(id: u32, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let store = SessionStore::seeded();
    let issue = store.issue(id)?;

    let ai = AiService::new(config.latencies.clone());
    let prediction = ai
        .predict_resolution_time(issue.category, issue.severity)
        .await?;

    if output.json {
        return print_json(&serde_json::json!({
            "issue": issue,
            "prediction": prediction,
        }));
    }

    println!(
        "{} {} {}{}",
        format!("#{}", issue.id).cyan(),
        issue.title.bold(),
        format_severity_colored(issue.severity),
        format_status_colored(issue.status),
    );
    println!();
    println!("{}", issue.description);
    println!();
    println!("Location:  {}", issue.location);
    println!("Category:  {}", issue.category);
    println!(
        "Reported:  by {} {}",
        issue.reported_by,
        format_relative_time(issue.reported_at)
    );
    if let Some(assigned) = &issue.assigned_to {
        println!("Assigned:  {assigned}");
    }
    println!("Votes:     {}", issue.upvotes);
    println!(
        "Estimated resolution: {} days ({})",
        prediction.estimated_days,
        prediction.confidence_label()
    );

    if !issue.updates.is_empty() {
        println!("\n{}", "## Status updates".bold());
        for update in &issue.updates {
            println!(
                "- {} {} ({})",
                format_status_colored(update.status),
                update.description,
                format_relative_time(update.time)
            );
        }
    }

    if !issue.comments.is_empty() {
        println!("\n{}", "## Comments".bold());
        for comment in &issue.comments {
            let tag = if comment.is_official {
                " [official]".green().to_string()
            } else if comment.is_author {
                " [reporter]".dimmed().to_string()
            } else {
                String::new()
            };
            println!(
                "- {}{} ({}): {}",
                comment.user.cyan(),
                tag,
                format_relative_time(comment.time),
                comment.text
            );
        }
    }

    Ok(())
}
