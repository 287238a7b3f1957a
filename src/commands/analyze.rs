use owo_colors::OwoColorize;

use crate::ai::AiService;
use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::display::format_severity_colored;
use crate::error::Result;

/// Run the full AI analysis over a free-text description.
pub async fn cmd_analyze(description: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let ai = AiService::new(config.latencies.clone());

    let analysis = ai.analyze_issue(description).await?;

    if output.json {
        return print_json(&analysis);
    }

    println!("{}", "## AI analysis".bold());
    println!("Category:  {}", analysis.category);
    println!(
        "Severity:  {} {}",
        format_severity_colored(analysis.severity.level),
        analysis.severity.reasoning
    );
    println!(
        "Estimated resolution: {} days ({})",
        analysis.prediction.estimated_days,
        analysis.prediction.confidence_label()
    );
    Ok(())
}
