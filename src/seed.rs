//! Seeded demo collections.
//!
//! Every collection is built once at first access and never mutated in
//! place; session mutations (votes, comments, status updates) go through
//! `store::SessionStore`, which starts from clones of these seeds. Nothing
//! here survives process exit.

use jiff::{Span, Timestamp};
use once_cell::sync::Lazy;

use crate::issue::{Comment, Issue, StatusUpdate};
use crate::types::{AccountStatus, Category, IssueStatus, Severity};
use crate::user::{RoleProfile, User};

fn hours_ago(hours: i64) -> Timestamp {
    Timestamp::now() - Span::new().hours(hours)
}

fn issue(
    id: u32,
    title: &str,
    description: &str,
    location: &str,
    category: Category,
    status: IssueStatus,
    severity: Severity,
    reported_by: &str,
    reported_hours_ago: i64,
    upvotes: u32,
) -> Issue {
    Issue {
        id,
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        category,
        status,
        severity,
        reported_by: reported_by.to_string(),
        reported_at: hours_ago(reported_hours_ago),
        assigned_to: None,
        upvotes,
        distance_km: None,
        comments: vec![],
        updates: vec![],
    }
}

/// The browsable issue collection backing the issues list and detail pages.
pub static ISSUES: Lazy<Vec<Issue>> = Lazy::new(|| {
    let mut pothole = issue(
        1,
        "Large pothole on Linking Road",
        "There's a dangerous pothole near the junction that's causing traffic and is a hazard for two-wheelers.",
        "Bandra West, Linking Road",
        Category::Roads,
        IssueStatus::InProgress,
        Severity::High,
        "Amit S.",
        48,
        24,
    );
    pothole.assigned_to = Some("Roads Department, BMC".to_string());
    pothole.comments = vec![
        Comment {
            id: 1,
            user: "Amit S.".to_string(),
            text: "I've seen multiple two-wheelers struggle with this pothole. It's especially dangerous at night.".to_string(),
            time: hours_ago(48),
            is_author: true,
            is_official: false,
        },
        Comment {
            id: 2,
            user: "Priya M.".to_string(),
            text: "I can confirm this issue. Almost had an accident yesterday. Please fix this urgently!".to_string(),
            time: hours_ago(24),
            is_author: false,
            is_official: false,
        },
        Comment {
            id: 3,
            user: "BMC Roads Dept".to_string(),
            text: "Thank you for reporting. We have inspected the site and scheduled repairs for tomorrow.".to_string(),
            time: hours_ago(6),
            is_author: false,
            is_official: true,
        },
    ];
    pothole.updates = vec![
        StatusUpdate {
            id: 1,
            status: IssueStatus::Reported,
            time: hours_ago(48),
            description: "Issue reported by citizen".to_string(),
        },
        StatusUpdate {
            id: 2,
            status: IssueStatus::Assigned,
            time: hours_ago(24),
            description: "Assigned to Roads Department, BMC".to_string(),
        },
        StatusUpdate {
            id: 3,
            status: IssueStatus::InProgress,
            time: hours_ago(6),
            description: "Site inspection completed. Repairs scheduled.".to_string(),
        },
    ];

    vec![
        pothole,
        issue(
            2,
            "Irregular garbage collection",
            "Garbage hasn't been collected for the past 3 days in our area, causing hygiene issues.",
            "Andheri East, Marol",
            Category::Sanitation,
            IssueStatus::Reported,
            Severity::Medium,
            "Priya M.",
            24,
            18,
        ),
        issue(
            3,
            "Water supply disruption",
            "No water supply since yesterday morning. Multiple buildings in the area are affected.",
            "Dadar West, Shivaji Park",
            Category::WaterSupply,
            IssueStatus::Assigned,
            Severity::High,
            "Rahul K.",
            12,
            32,
        ),
        issue(
            4,
            "Street light not working",
            "The street light at the corner of our lane has been out for a week, making it unsafe at night.",
            "Malad West, Marve Road",
            Category::Electricity,
            IssueStatus::Resolved,
            Severity::Low,
            "Neha P.",
            120,
            15,
        ),
        issue(
            5,
            "Fallen tree blocking road",
            "A large tree has fallen and is partially blocking the road after last night's heavy rain.",
            "Powai, Hiranandani Gardens",
            Category::Environment,
            IssueStatus::Assigned,
            Severity::High,
            "Vikram T.",
            8,
            29,
        ),
        issue(
            6,
            "Sewage overflow on street",
            "Sewage is overflowing onto the street causing bad smell and unhygienic conditions.",
            "Kurla West, LBS Marg",
            Category::Drainage,
            IssueStatus::InProgress,
            Severity::Critical,
            "Sanjay M.",
            72,
            42,
        ),
    ]
});

/// Nearby open issues shown on the find-and-vote page, with distance hints.
pub static SIMILAR_ISSUES: Lazy<Vec<Issue>> = Lazy::new(|| {
    let mut issues = vec![
        issue(
            1,
            "Large pothole on Linking Road near Turner Road junction",
            "There's a dangerous pothole near the junction that's causing traffic and is a hazard for two-wheelers.",
            "Bandra West, Linking Road",
            Category::Roads,
            IssueStatus::InProgress,
            Severity::High,
            "Amit S.",
            48,
            24,
        ),
        issue(
            2,
            "Multiple potholes on Linking Road causing traffic jams",
            "Several potholes have appeared after recent rains, causing traffic congestion during peak hours.",
            "Bandra West, Linking Road near Elco Market",
            Category::Roads,
            IssueStatus::Reported,
            Severity::Medium,
            "Priya M.",
            24,
            18,
        ),
        issue(
            3,
            "Damaged road surface on Linking Road",
            "The road surface is damaged and uneven, causing problems for vehicles.",
            "Bandra West, Linking Road near Shoppers Stop",
            Category::Roads,
            IssueStatus::Assigned,
            Severity::Medium,
            "Rahul K.",
            72,
            12,
        ),
        issue(
            4,
            "Water logging due to blocked drain on Linking Road",
            "Water accumulates on the road after rain due to blocked drainage, causing traffic issues.",
            "Bandra West, Linking Road",
            Category::Drainage,
            IssueStatus::InProgress,
            Severity::Medium,
            "Neha P.",
            96,
            15,
        ),
    ];
    let distances = [0.2, 0.5, 0.8, 0.3];
    for (issue, km) in issues.iter_mut().zip(distances) {
        issue.distance_km = Some(km);
    }
    issues
});

fn user(
    id: u32,
    name: &str,
    email: &str,
    profile: RoleProfile,
    status: AccountStatus,
    verified: bool,
    last_active_hours_ago: Option<i64>,
    joined_hours_ago: i64,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        profile,
        status,
        verified,
        last_active: last_active_hours_ago.map(hours_ago),
        joined: hours_ago(joined_hours_ago),
    }
}

/// Registered accounts backing the admin user-management view.
pub static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user(
            1,
            "Amit Sharma",
            "amit.sharma@example.com",
            RoleProfile::Citizen { issues_reported: 12 },
            AccountStatus::Active,
            true,
            Some(2),
            24 * 400,
        ),
        user(
            2,
            "Priya Mehta",
            "priya.mehta@example.com",
            RoleProfile::Citizen { issues_reported: 8 },
            AccountStatus::Active,
            true,
            Some(24),
            24 * 380,
        ),
        user(
            3,
            "Rahul Kumar",
            "rahul.kumar@example.com",
            RoleProfile::Official {
                department: "Roads Department".to_string(),
                issues_resolved: 45,
            },
            AccountStatus::Active,
            true,
            Some(3),
            24 * 460,
        ),
        user(
            4,
            "Neha Patel",
            "neha.patel@example.com",
            RoleProfile::Citizen { issues_reported: 3 },
            AccountStatus::Inactive,
            true,
            Some(24 * 60),
            24 * 340,
        ),
        user(
            5,
            "Vikram Thapar",
            "vikram.thapar@example.com",
            RoleProfile::Official {
                department: "Water Supply Department".to_string(),
                issues_resolved: 28,
            },
            AccountStatus::Active,
            true,
            Some(5),
            24 * 430,
        ),
        user(
            6,
            "Sanjay Malhotra",
            "sanjay.malhotra@example.com",
            RoleProfile::Admin,
            AccountStatus::Active,
            true,
            Some(1),
            24 * 500,
        ),
        user(
            7,
            "Ananya Singh",
            "ananya.singh@example.com",
            RoleProfile::Citizen { issues_reported: 0 },
            AccountStatus::Pending,
            false,
            None,
            24 * 290,
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_issue_ids_unique() {
        let ids: HashSet<u32> = ISSUES.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), ISSUES.len());
    }

    #[test]
    fn test_similar_issue_ids_unique_and_carry_distance() {
        let ids: HashSet<u32> = SIMILAR_ISSUES.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), SIMILAR_ISSUES.len());
        assert!(SIMILAR_ISSUES.iter().all(|i| i.distance_km.is_some()));
    }

    #[test]
    fn test_user_ids_unique() {
        let ids: HashSet<u32> = USERS.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), USERS.len());
    }

    #[test]
    fn test_seed_audit_trail_matches_headline_status() {
        let pothole = &ISSUES[0];
        let last = pothole.updates.last().expect("seed issue has a trail");
        assert_eq!(last.status, pothole.status);
    }

    #[test]
    fn test_pending_user_never_signed_in() {
        let pending = USERS.iter().find(|u| u.status == AccountStatus::Pending).unwrap();
        assert!(pending.last_active.is_none());
        assert!(!pending.verified);
    }
}
