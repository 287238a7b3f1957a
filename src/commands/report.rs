use owo_colors::OwoColorize;

use crate::ai::AiService;
use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::display::format_issue_bullet;
use crate::error::Result;
use crate::forms::ReportForm;
use crate::simulate::{CivicApi, SimulatedBackend};
use crate::store::SessionStore;
use crate::types::{Category, Severity};

/// Options for filing a new issue report.
pub struct ReportOptions {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub photo: Option<String>,
    pub reporter: String,
    /// Let the AI fill in category and severity when not given.
    pub analyze: bool,
}

/// File a new issue report: validate, surface similar nearby issues,
/// then submit through the simulated backend.
pub async fn cmd_report(options: ReportOptions, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let backend = SimulatedBackend::new(config.latencies.clone());
    let ai = AiService::new(config.latencies.clone());
    let store = SessionStore::seeded();

    let mut category = options.category;
    let mut severity = options.severity;

    if options.analyze && (category.is_none() || severity.is_none()) {
        tracing::debug!("running AI analysis to fill in missing fields");
        let analysis = ai.analyze_issue(&options.description).await?;
        if category.is_none() {
            category = Some(analysis.category);
        }
        if severity.is_none() {
            severity = Some(analysis.severity.level);
        }
        if !output.json {
            println!(
                "AI analysis: {} / {} - {}",
                analysis.category, analysis.severity.level, analysis.severity.reasoning
            );
        }
    }

    let form = ReportForm {
        title: options.title,
        description: options.description,
        location: options.location,
        category,
        severity,
        photo_path: options.photo,
    };
    // Validation failures never reach the simulated backend
    form.validate()?;

    let similar = backend.search_similar(&form.location).await?;
    if !similar.is_empty() && !output.json {
        println!("{}", "Similar issues reported nearby:".bold());
        for issue in &similar {
            println!("{}", format_issue_bullet(issue));
        }
        println!("Consider voting for an existing issue instead of filing a duplicate.\n");
    }

    if let Some(photo) = &form.photo_path {
        let verification = ai.verify_image(photo).await?;
        if !output.json {
            println!(
                "Photo verification: {} ({:.0}% confidence)",
                if verification.verified { "passed" } else { "failed" },
                verification.confidence * 100.0
            );
        }
    }

    backend.submit_report(&form).await?;
    let id = store.file_report(&form, &options.reporter)?;

    if output.json {
        return print_json(&store.issue(id)?);
    }

    println!("{} Issue #{id} reported successfully.", "OK".green());
    Ok(())
}
