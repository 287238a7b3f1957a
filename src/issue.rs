//! Issue records: the citizen-reported complaint, its comment thread, and
//! its append-only status audit trail.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::types::{Category, IssueStatus, Severity};

/// A citizen-reported civic problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Unique within the session's issue collection.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Free-text locality, e.g. "Bandra West, Linking Road".
    pub location: String,
    pub category: Category,
    pub status: IssueStatus,
    pub severity: Severity,
    pub reported_by: String,
    pub reported_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub upvotes: u32,
    /// Distance hint on the similar-issues page, in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<StatusUpdate>,
}

impl Issue {
    /// Append a status update to the audit trail and sync the headline status.
    ///
    /// The trail is append-only; no transition ordering is enforced.
    pub fn record_update(&mut self, status: IssueStatus, description: impl Into<String>) -> StatusUpdate {
        let next_id = self.updates.last().map(|u| u.id + 1).unwrap_or(1);
        let update = StatusUpdate {
            id: next_id,
            status,
            time: Timestamp::now(),
            description: description.into(),
        };
        self.updates.push(update.clone());
        self.status = status;
        update
    }

    /// Append a comment to the thread.
    pub fn add_comment(&mut self, user: impl Into<String>, text: impl Into<String>, is_official: bool) -> Comment {
        let user = user.into();
        let is_author = user == self.reported_by;
        let next_id = self.comments.last().map(|c| c.id + 1).unwrap_or(1);
        let comment = Comment {
            id: next_id,
            user,
            text: text.into(),
            time: Timestamp::now(),
            is_author,
            is_official,
        };
        self.comments.push(comment.clone());
        comment
    }
}

/// A comment on an issue's discussion thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub user: String,
    pub text: String,
    pub time: Timestamp,
    /// True when the commenter is the original reporter.
    pub is_author: bool,
    /// True for responses from a government department account.
    #[serde(default)]
    pub is_official: bool,
}

/// One entry in an issue's append-only audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: u32,
    pub status: IssueStatus,
    pub time: Timestamp,
    pub description: String,
}
