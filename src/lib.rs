pub mod ai;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod issue;
pub mod query;
pub mod reports;
pub mod seed;
pub mod session;
pub mod simulate;
pub mod store;
pub mod types;
pub mod user;

pub use config::{Config, Latencies};
pub use error::{PortalError, Result};
pub use issue::{Comment, Issue, StatusUpdate};
pub use query::{IssueQuery, Selection, UserQuery};
pub use session::{ActionState, Banner, VoteAction, VoteState, reduce_vote_state};
pub use simulate::{CivicApi, SimulatedBackend};
pub use store::SessionStore;
pub use types::{
    AccountStatus, Category, FileFormat, IssueStatus, ReportKind, Role, Severity,
    VALID_ACCOUNT_STATUSES, VALID_CATEGORIES, VALID_ROLES, VALID_SEVERITIES, VALID_STATUSES,
};
pub use user::{RoleProfile, User};
