use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{OutputOptions, print_json};
use crate::display::format_user_line;
use crate::error::Result;
use crate::query::UserQuery;
use crate::store::SessionStore;

/// A row in the user management table.
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Id")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// List registered users, filtered client-side.
pub async fn cmd_users(
    query: Option<&str>,
    role: &str,
    status: &str,
    table: bool,
    output: OutputOptions,
) -> Result<()> {
    let store = SessionStore::seeded();
    let users = store.all_users();

    let filter = UserQuery::from_strings(query.unwrap_or(""), Some(role), Some(status))?;
    let matched = filter.apply(&users);

    if output.json {
        return print_json(&matched);
    }

    if matched.is_empty() {
        println!("No users match the current filters.");
        return Ok(());
    }

    if table {
        let rows: Vec<UserRow> = matched
            .iter()
            .map(|u| UserRow {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
                role: u.profile.role().to_string(),
                status: u.status.to_string(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{table}");
    } else {
        for user in &matched {
            println!("{}", format_user_line(user));
        }
    }

    println!("\n{} of {} users shown", matched.len(), users.len());
    Ok(())
}
