use owo_colors::OwoColorize;

use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::reports::{DateRange, ReportRequest};
use crate::simulate::{CivicApi, SimulatedBackend};
use crate::types::{Category, FileFormat, ReportKind};

/// Generate (or preview) an analytics report export.
#[allow(clippy::too_many_arguments)]
pub async fn cmd_export(
    kind: ReportKind,
    format: FileFormat,
    range: DateRange,
    categories: Vec<Category>,
    location: Option<String>,
    no_charts: bool,
    raw_data: bool,
    preview: bool,
    output: OutputOptions,
) -> Result<()> {
    let config = Config::load()?;
    let backend = SimulatedBackend::new(config.latencies.clone());

    let request = ReportRequest {
        kind,
        date_range: range,
        format,
        categories,
        location,
        include_charts: !no_charts,
        include_raw_data: raw_data,
    };

    if preview {
        let preview = backend.preview_report(&request).await?;
        if output.json {
            return print_json(&serde_json::json!({
                "title": preview.title,
                "lines": preview.lines,
            }));
        }
        println!("{}", preview.title.bold());
        for line in &preview.lines {
            println!("  {line}");
        }
        return Ok(());
    }

    let generated = backend.generate_report(&request).await?;
    if output.json {
        return print_json(&serde_json::json!({
            "file_name": generated.file_name,
            "request": generated.request,
        }));
    }

    println!(
        "{} Report generated: {}",
        "OK".green(),
        generated.file_name
    );
    Ok(())
}
