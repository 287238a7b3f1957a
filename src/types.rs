use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PortalError;

/// Issue categories a citizen can report under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Roads,
    WaterSupply,
    Electricity,
    Sanitation,
    Drainage,
    Environment,
    Traffic,
    Parks,
    Noise,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Roads => write!(f, "Roads"),
            Category::WaterSupply => write!(f, "Water Supply"),
            Category::Electricity => write!(f, "Electricity"),
            Category::Sanitation => write!(f, "Sanitation"),
            Category::Drainage => write!(f, "Drainage"),
            Category::Environment => write!(f, "Environment"),
            Category::Traffic => write!(f, "Traffic"),
            Category::Parks => write!(f, "Parks"),
            Category::Noise => write!(f, "Noise"),
        }
    }
}

impl FromStr for Category {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "roads" | "roads & potholes" => Ok(Category::Roads),
            "water" | "water supply" | "water-supply" => Ok(Category::WaterSupply),
            "electricity" => Ok(Category::Electricity),
            "sanitation" | "sanitation & garbage" => Ok(Category::Sanitation),
            "drainage" | "drainage & flooding" => Ok(Category::Drainage),
            "environment" => Ok(Category::Environment),
            "traffic" | "traffic & transportation" => Ok(Category::Traffic),
            "parks" | "parks & public spaces" => Ok(Category::Parks),
            "noise" | "noise pollution" => Ok(Category::Noise),
            _ => Err(PortalError::InvalidCategory(s.to_string())),
        }
    }
}

pub const VALID_CATEGORIES: &[&str] = &[
    "roads",
    "water-supply",
    "electricity",
    "sanitation",
    "drainage",
    "environment",
    "traffic",
    "parks",
    "noise",
];

/// Lifecycle status of a reported issue.
///
/// Presented to citizens as a linear audit trail; nothing enforces
/// forward-only transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    #[default]
    Reported,
    Assigned,
    InProgress,
    Resolved,
    Closed,
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueStatus::Reported => write!(f, "Reported"),
            IssueStatus::Assigned => write!(f, "Assigned"),
            IssueStatus::InProgress => write!(f, "In Progress"),
            IssueStatus::Resolved => write!(f, "Resolved"),
            IssueStatus::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for IssueStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reported" => Ok(IssueStatus::Reported),
            "assigned" => Ok(IssueStatus::Assigned),
            "in progress" | "in-progress" => Ok(IssueStatus::InProgress),
            "resolved" => Ok(IssueStatus::Resolved),
            "closed" => Ok(IssueStatus::Closed),
            _ => Err(PortalError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] =
    &["reported", "assigned", "in-progress", "resolved", "closed"];

/// Severity assigned by the simulated AI assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

impl FromStr for Severity {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(PortalError::InvalidSeverity(s.to_string())),
        }
    }
}

pub const VALID_SEVERITIES: &[&str] = &["low", "medium", "high", "critical"];

/// Account role. Role-specific data lives in `user::RoleProfile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Citizen,
    Official,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Citizen => write!(f, "Citizen"),
            Role::Official => write!(f, "Government Official"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

impl FromStr for Role {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "citizen" => Ok(Role::Citizen),
            "official" | "government official" => Ok(Role::Official),
            "admin" => Ok(Role::Admin),
            _ => Err(PortalError::InvalidRole(s.to_string())),
        }
    }
}

pub const VALID_ROLES: &[&str] = &["citizen", "official", "admin"];

/// Account standing of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "Active"),
            AccountStatus::Inactive => write!(f, "Inactive"),
            AccountStatus::Pending => write!(f, "Pending"),
        }
    }
}

impl FromStr for AccountStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "inactive" => Ok(AccountStatus::Inactive),
            "pending" => Ok(AccountStatus::Pending),
            _ => Err(PortalError::InvalidAccountStatus(s.to_string())),
        }
    }
}

pub const VALID_ACCOUNT_STATUSES: &[&str] = &["active", "inactive", "pending"];

/// Export file format. Selection only; no real file is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Pdf,
    Xlsx,
    Csv,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "pdf",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for FileFormat {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(FileFormat::Pdf),
            "xlsx" => Ok(FileFormat::Xlsx),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(PortalError::InvalidFormat(s.to_string())),
        }
    }
}

pub const VALID_FORMATS: &[&str] = &["pdf", "xlsx", "csv"];

/// Admin export report kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    IssuesSummary,
    ResolutionTime,
    UserActivity,
    CategoryDistribution,
    LocationHeatmap,
    DepartmentPerformance,
}

impl ReportKind {
    /// Stable identifier used in generated file names.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::IssuesSummary => "issues-summary",
            ReportKind::ResolutionTime => "resolution-time",
            ReportKind::UserActivity => "user-activity",
            ReportKind::CategoryDistribution => "category-distribution",
            ReportKind::LocationHeatmap => "location-heatmap",
            ReportKind::DepartmentPerformance => "department-performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::IssuesSummary => "Issues Summary",
            ReportKind::ResolutionTime => "Resolution Time Analysis",
            ReportKind::UserActivity => "User Activity",
            ReportKind::CategoryDistribution => "Category Distribution",
            ReportKind::LocationHeatmap => "Location Heatmap",
            ReportKind::DepartmentPerformance => "Department Performance",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ReportKind {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "issues-summary" => Ok(ReportKind::IssuesSummary),
            "resolution-time" => Ok(ReportKind::ResolutionTime),
            "user-activity" => Ok(ReportKind::UserActivity),
            "category-distribution" => Ok(ReportKind::CategoryDistribution),
            "location-heatmap" => Ok(ReportKind::LocationHeatmap),
            "department-performance" => Ok(ReportKind::DepartmentPerformance),
            _ => Err(PortalError::InvalidReportKind(s.to_string())),
        }
    }
}

pub const VALID_REPORT_KINDS: &[&str] = &[
    "issues-summary",
    "resolution-time",
    "user-activity",
    "category-distribution",
    "location-heatmap",
    "department-performance",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for s in VALID_CATEGORIES {
            let parsed: Category = s.parse().expect("valid category should parse");
            // Display form must parse back to the same variant
            assert_eq!(parsed.to_string().parse::<Category>().unwrap(), parsed);
        }
    }

    #[test]
    fn test_category_accepts_display_aliases() {
        assert_eq!("Roads & Potholes".parse::<Category>().unwrap(), Category::Roads);
        assert_eq!("water supply".parse::<Category>().unwrap(), Category::WaterSupply);
        assert_eq!("WATER".parse::<Category>().unwrap(), Category::WaterSupply);
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!("In Progress".parse::<IssueStatus>().unwrap(), IssueStatus::InProgress);
        assert_eq!("in-progress".parse::<IssueStatus>().unwrap(), IssueStatus::InProgress);
        assert_eq!("RESOLVED".parse::<IssueStatus>().unwrap(), IssueStatus::Resolved);
    }

    #[test]
    fn test_invalid_strings_fail_to_parse() {
        assert!("typo".parse::<Category>().is_err());
        assert!("open".parse::<IssueStatus>().is_err());
        assert!("severe".parse::<Severity>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("docx".parse::<FileFormat>().is_err());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_report_kind_slug_matches_parse() {
        for s in VALID_REPORT_KINDS {
            let parsed: ReportKind = s.parse().expect("valid report kind should parse");
            assert_eq!(parsed.slug(), *s);
        }
    }
}
