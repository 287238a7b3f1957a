use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("issue #{0} not found")]
    IssueNotFound(u32),

    #[error("user #{0} not found")]
    UserNotFound(u32),

    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid severity '{0}'")]
    InvalidSeverity(String),

    #[error("invalid role '{0}'")]
    InvalidRole(String),

    #[error("invalid account status '{0}'")]
    InvalidAccountStatus(String),

    #[error("invalid file format '{0}'")]
    InvalidFormat(String),

    #[error("invalid report kind '{0}'")]
    InvalidReportKind(String),

    // Client-side form validation; raised before any simulated call is made
    #[error("{0}")]
    Validation(String),

    #[error("already voted on issue #{0}")]
    AlreadyVoted(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;
