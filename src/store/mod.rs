//! In-memory session store.
//!
//! The store holds issues and users in `DashMap` structures keyed by id,
//! seeded from the bundled demo data. Mutations (votes, comments, status
//! updates) live only for the process lifetime; nothing is persisted.

use dashmap::DashMap;
use jiff::Timestamp;

use crate::error::{PortalError, Result};
use crate::forms::ReportForm;
use crate::issue::{Comment, Issue, StatusUpdate};
use crate::seed::{ISSUES, USERS};
use crate::types::{IssueStatus, Severity};
use crate::user::User;

pub struct SessionStore {
    issues: DashMap<u32, Issue>,
    users: DashMap<u32, User>,
}

impl SessionStore {
    /// Store pre-populated with the seed issues and users.
    pub fn seeded() -> Self {
        let store = Self::empty();
        for issue in ISSUES.iter() {
            store.issues.insert(issue.id, issue.clone());
        }
        for user in USERS.iter() {
            store.users.insert(user.id, user.clone());
        }
        store
    }

    pub fn empty() -> Self {
        Self {
            issues: DashMap::new(),
            users: DashMap::new(),
        }
    }

    // ============================================================
    // Issues
    // ============================================================

    pub fn issue(&self, id: u32) -> Result<Issue> {
        self.issues
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(PortalError::IssueNotFound(id))
    }

    /// All issues, sorted by id for deterministic output.
    pub fn all_issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self.issues.iter().map(|e| e.value().clone()).collect();
        issues.sort_by_key(|i| i.id);
        issues
    }

    /// File a new issue from a validated report form. Returns the
    /// assigned id.
    pub fn file_report(&self, form: &ReportForm, reported_by: &str) -> Result<u32> {
        form.validate()?;
        let id = self.next_issue_id();
        let category = form.category.ok_or_else(|| {
            PortalError::Validation("Please fill in all required fields".to_string())
        })?;
        let issue = Issue {
            id,
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            location: form.location.trim().to_string(),
            category,
            status: IssueStatus::Reported,
            severity: form.severity.unwrap_or(Severity::Medium),
            reported_by: reported_by.to_string(),
            reported_at: Timestamp::now(),
            assigned_to: None,
            upvotes: 0,
            distance_km: None,
            comments: Vec::new(),
            updates: Vec::new(),
        };
        self.issues.insert(id, issue);
        tracing::debug!("filed issue #{id}");
        Ok(id)
    }

    /// Increment the upvote count. Returns the new total.
    pub fn upvote(&self, id: u32) -> Result<u32> {
        let mut entry = self
            .issues
            .get_mut(&id)
            .ok_or(PortalError::IssueNotFound(id))?;
        entry.upvotes += 1;
        Ok(entry.upvotes)
    }

    /// Append a comment to an issue. Returns the stored comment.
    pub fn comment(&self, id: u32, user: &str, text: &str, is_official: bool) -> Result<Comment> {
        let mut entry = self
            .issues
            .get_mut(&id)
            .ok_or(PortalError::IssueNotFound(id))?;
        let comment = entry.add_comment(user, text, is_official);
        Ok(comment)
    }

    /// Append a status update to an issue's trail and sync its headline
    /// status.
    pub fn update_status(
        &self,
        id: u32,
        status: IssueStatus,
        description: &str,
    ) -> Result<StatusUpdate> {
        let mut entry = self
            .issues
            .get_mut(&id)
            .ok_or(PortalError::IssueNotFound(id))?;
        let update = entry.record_update(status, description);
        Ok(update)
    }

    fn next_issue_id(&self) -> u32 {
        self.issues.iter().map(|e| e.key() + 1).max().unwrap_or(1)
    }

    // ============================================================
    // Users
    // ============================================================

    pub fn user(&self, id: u32) -> Result<User> {
        self.users
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(PortalError::UserNotFound(id))
    }

    /// All users, sorted by id for deterministic output.
    pub fn all_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        users
    }
}
