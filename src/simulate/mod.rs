//! Simulated backend for the portal.
//!
//! Every remote interaction the portal performs goes through [`CivicApi`].
//! The shipped implementation, [`SimulatedBackend`], answers each call from
//! in-process data after a fixed artificial delay: there is no transport,
//! no server and no failure path. Calls always resolve successfully once
//! their delay elapses, which makes latency behavior fully deterministic
//! under a paused test clock.

use crate::chat;
use crate::config::Latencies;
use crate::error::Result;
use crate::forms::ReportForm;
use crate::issue::Issue;
use crate::reports::ReportRequest;
use crate::seed::{SIMILAR_ISSUES, USERS};
use crate::types::Role;

/// Outcome of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AuthSession {
    pub email: String,
    pub role: Role,
}

/// Outcome of a generated analytics report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub file_name: String,
    pub request: ReportRequest,
}

/// Faked preview of an analytics report before export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPreview {
    pub title: String,
    pub lines: Vec<String>,
}

/// The portal's backend surface.
///
/// Mutating calls return `Ok(())` once the simulated round-trip completes;
/// persisting their effect is the caller's concern.
#[async_trait::async_trait]
pub trait CivicApi: Send + Sync {
    /// Sign in with an email address. Any credentials are accepted; the
    /// role is looked up from the known-user roster when the email matches.
    async fn login(&self, email: &str) -> Result<AuthSession>;

    /// Register a new administrator account.
    async fn register_admin(&self, email: &str) -> Result<AuthSession>;

    /// Submit a new issue report.
    async fn submit_report(&self, form: &ReportForm) -> Result<()>;

    /// Cast a community vote on an issue.
    async fn submit_vote(&self, issue_id: u32) -> Result<()>;

    /// Post a comment on an issue.
    async fn add_comment(&self, issue_id: u32, text: &str) -> Result<()>;

    /// Look up nearby issues similar to a draft report.
    async fn search_similar(&self, location: &str) -> Result<Vec<Issue>>;

    /// Produce an exportable analytics report.
    async fn generate_report(&self, request: &ReportRequest) -> Result<GeneratedReport>;

    /// Produce an on-screen preview of an analytics report.
    async fn preview_report(&self, request: &ReportRequest) -> Result<ReportPreview>;

    /// Send a message to the support assistant and get its reply.
    async fn chat(&self, message: &str) -> Result<String>;
}

/// In-process [`CivicApi`] implementation backed by the seed data.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    latencies: Latencies,
}

impl SimulatedBackend {
    pub fn new(latencies: Latencies) -> Self {
        Self { latencies }
    }

    /// Backend with zero delays, for non-interactive callers.
    pub fn instant() -> Self {
        Self::new(Latencies::zero())
    }

    fn roster_role(email: &str) -> Role {
        USERS
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| u.profile.role())
            .unwrap_or(Role::Citizen)
    }
}

#[async_trait::async_trait]
impl CivicApi for SimulatedBackend {
    async fn login(&self, email: &str) -> Result<AuthSession> {
        tokio::time::sleep(self.latencies.auth()).await;
        Ok(AuthSession {
            email: email.to_string(),
            role: Self::roster_role(email),
        })
    }

    async fn register_admin(&self, email: &str) -> Result<AuthSession> {
        tokio::time::sleep(self.latencies.auth()).await;
        Ok(AuthSession {
            email: email.to_string(),
            role: Role::Admin,
        })
    }

    async fn submit_report(&self, _form: &ReportForm) -> Result<()> {
        tokio::time::sleep(self.latencies.submit()).await;
        Ok(())
    }

    async fn submit_vote(&self, _issue_id: u32) -> Result<()> {
        tokio::time::sleep(self.latencies.vote()).await;
        Ok(())
    }

    async fn add_comment(&self, _issue_id: u32, _text: &str) -> Result<()> {
        tokio::time::sleep(self.latencies.comment()).await;
        Ok(())
    }

    async fn search_similar(&self, _location: &str) -> Result<Vec<Issue>> {
        tokio::time::sleep(self.latencies.search()).await;
        Ok(SIMILAR_ISSUES.clone())
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<GeneratedReport> {
        tokio::time::sleep(self.latencies.generate()).await;
        Ok(GeneratedReport {
            file_name: request.file_name(),
            request: request.clone(),
        })
    }

    async fn preview_report(&self, request: &ReportRequest) -> Result<ReportPreview> {
        tokio::time::sleep(self.latencies.preview()).await;
        Ok(ReportPreview {
            title: format!("{} ({})", request.kind.label(), request.date_range),
            lines: request.preview_lines(),
        })
    }

    async fn chat(&self, message: &str) -> Result<String> {
        tokio::time::sleep(self.latencies.chat()).await;
        Ok(chat::respond(message))
    }
}
