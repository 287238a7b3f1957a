//! Mock data builders shared by the integration suites.

#![allow(dead_code)]

use jiff::Timestamp;

use civic_connect::issue::Issue;
use civic_connect::types::{Category, IssueStatus, Severity};

/// Builder for creating test issues without touching the seed data.
pub struct IssueBuilder {
    issue: Issue,
}

impl IssueBuilder {
    pub fn new(id: u32, title: &str) -> Self {
        Self {
            issue: Issue {
                id,
                title: title.to_string(),
                description: String::new(),
                location: String::new(),
                category: Category::Roads,
                status: IssueStatus::Reported,
                severity: Severity::Medium,
                reported_by: "Test Reporter".to_string(),
                reported_at: Timestamp::UNIX_EPOCH,
                assigned_to: None,
                upvotes: 0,
                distance_km: None,
                comments: Vec::new(),
                updates: Vec::new(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.issue.description = description.to_string();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.issue.location = location.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.issue.category = category;
        self
    }

    pub fn status(mut self, status: IssueStatus) -> Self {
        self.issue.status = status;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.issue.severity = severity;
        self
    }

    pub fn upvotes(mut self, upvotes: u32) -> Self {
        self.issue.upvotes = upvotes;
        self
    }

    pub fn build(self) -> Issue {
        self.issue
    }
}

/// Five-issue fixture spanning three categories and two locations.
pub fn five_issue_scenario() -> Vec<Issue> {
    vec![
        IssueBuilder::new(1, "Pothole on Linking Road")
            .location("Linking Road, Bandra West")
            .category(Category::Roads)
            .build(),
        IssueBuilder::new(2, "Water pipe leak")
            .location("Hill Road, Bandra West")
            .category(Category::WaterSupply)
            .build(),
        IssueBuilder::new(3, "Cracked pavement near school")
            .location("SV Road, Andheri")
            .category(Category::Roads)
            .build(),
        IssueBuilder::new(4, "Streetlight flickering")
            .location("Juhu Tara Road")
            .category(Category::Electricity)
            .build(),
        IssueBuilder::new(5, "Road divider damaged")
            .location("Western Express Highway")
            .category(Category::Roads)
            .build(),
    ]
}
