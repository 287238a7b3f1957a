mod analyze;
mod chat;
mod export;
mod issues;
mod login;
mod register;
mod report;
mod show;
mod users;
mod vote;

pub use analyze::cmd_analyze;
pub use chat::cmd_chat;
pub use export::cmd_export;
pub use issues::cmd_issues;
pub use login::cmd_login;
pub use register::{RegisterOptions, cmd_register};
pub use report::{ReportOptions, cmd_report};
pub use show::cmd_show;
pub use users::cmd_users;
pub use vote::{VoteOptions, cmd_vote};

use crate::error::Result;

/// Output options shared by list-style commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

/// Serialize a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
