//! Per-page session state shared across flows: the pending-action guard
//! that stands in for a disabled submit control, and transient banners.

use std::time::{Duration, Instant};

pub mod vote;

pub use vote::{VoteAction, VoteState, reduce_vote_state};

/// How long a transient success banner stays up before auto-dismissing.
pub const BANNER_TTL: Duration = Duration::from_secs(3);

/// Severity level for banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Info,
    Success,
    Error,
}

/// A transient notification banner.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub level: BannerLevel,
    /// When the banner was raised; drives auto-dismissal.
    pub raised_at: Instant,
}

impl Banner {
    pub fn new(message: impl Into<String>, level: BannerLevel) -> Self {
        Self {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, BannerLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, BannerLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, BannerLevel::Error)
    }

    /// True once the banner has outlived its display window.
    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= BANNER_TTL
    }
}

/// Loading state for a single triggering control.
///
/// While pending, the control is disabled: `begin` refuses re-entry, which
/// is the portal's only duplicate-submission guard. There is no way to
/// abort an in-flight action before its delay elapses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Pending {
        /// Label shown on the disabled control, e.g. "Submitting...".
        label: String,
    },
}

impl ActionState {
    /// Enter the pending state. Returns false (and changes nothing) if an
    /// action is already in flight.
    pub fn begin(&mut self, label: impl Into<String>) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = ActionState::Pending {
            label: label.into(),
        };
        true
    }

    /// Clear the pending state once the action resolves.
    pub fn finish(&mut self) {
        *self = ActionState::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ActionState::Pending { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ActionState::Pending { label } => Some(label),
            ActionState::Idle => None,
        }
    }
}
