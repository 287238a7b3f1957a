//! Analytics report export requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::types::{Category, FileFormat, ReportKind};

pub const VALID_DATE_RANGES: &[&str] = &["last-7-days", "last-30-days", "last-90-days", "last-year"];

/// Reporting window for an analytics export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DateRange::Last7Days => "last 7 days",
            DateRange::Last30Days => "last 30 days",
            DateRange::Last90Days => "last 90 days",
            DateRange::LastYear => "last year",
        };
        write!(f, "{s}")
    }
}

impl FromStr for DateRange {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last-7-days" | "7d" => Ok(DateRange::Last7Days),
            "last-30-days" | "30d" => Ok(DateRange::Last30Days),
            "last-90-days" | "90d" => Ok(DateRange::Last90Days),
            "last-year" | "1y" => Ok(DateRange::LastYear),
            _ => Err(PortalError::Other(format!(
                "invalid date range: '{}' (valid: {})",
                s,
                VALID_DATE_RANGES.join(", ")
            ))),
        }
    }
}

/// A configured analytics export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub date_range: DateRange,
    pub format: FileFormat,
    /// Empty means all categories.
    pub categories: Vec<Category>,
    pub location: Option<String>,
    pub include_charts: bool,
    pub include_raw_data: bool,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            kind: ReportKind::IssuesSummary,
            date_range: DateRange::default(),
            format: FileFormat::Pdf,
            categories: Vec::new(),
            location: None,
            include_charts: true,
            include_raw_data: false,
        }
    }
}

impl ReportRequest {
    /// Name of the exported file, e.g. `issues-summary-report.pdf`.
    pub fn file_name(&self) -> String {
        format!("{}-report.{}", self.kind.slug(), self.format.extension())
    }

    /// Summary lines shown in the on-screen preview.
    pub fn preview_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Report: {}", self.kind.label()),
            format!("Period: {}", self.date_range),
            format!("Format: {}", self.format),
        ];
        if self.categories.is_empty() {
            lines.push("Categories: all".to_string());
        } else {
            let names: Vec<String> = self.categories.iter().map(|c| c.to_string()).collect();
            lines.push(format!("Categories: {}", names.join(", ")));
        }
        if let Some(location) = &self.location {
            lines.push(format!("Location: {location}"));
        }
        if self.include_charts {
            lines.push("Includes charts and visualizations".to_string());
        }
        if self.include_raw_data {
            lines.push("Includes raw data tables".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_combines_kind_and_format() {
        let request = ReportRequest {
            kind: ReportKind::CategoryDistribution,
            format: FileFormat::Xlsx,
            ..Default::default()
        };
        assert_eq!(request.file_name(), "category-distribution-report.xlsx");
    }

    #[test]
    fn test_default_request_is_pdf_summary() {
        let request = ReportRequest::default();
        assert_eq!(request.file_name(), "issues-summary-report.pdf");
    }

    #[test]
    fn test_date_range_parse_aliases() {
        assert_eq!("last-7-days".parse::<DateRange>().unwrap(), DateRange::Last7Days);
        assert_eq!("90d".parse::<DateRange>().unwrap(), DateRange::Last90Days);
        assert!("next-week".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_preview_lines_reflect_options() {
        let request = ReportRequest {
            kind: ReportKind::LocationHeatmap,
            categories: vec![Category::Roads, Category::Drainage],
            location: Some("Bandra West".to_string()),
            include_charts: false,
            include_raw_data: true,
            ..Default::default()
        };
        let lines = request.preview_lines();
        assert!(lines.iter().any(|l| l.contains("Roads, Drainage")));
        assert!(lines.iter().any(|l| l.contains("Bandra West")));
        assert!(lines.iter().any(|l| l.contains("raw data")));
        assert!(!lines.iter().any(|l| l.contains("charts")));
    }
}
