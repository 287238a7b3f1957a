use owo_colors::OwoColorize;

use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::forms::LoginForm;
use crate::simulate::{CivicApi, SimulatedBackend};

/// Sign in and print the resulting session.
pub async fn cmd_login(email: String, password: String, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let backend = SimulatedBackend::new(config.latencies.clone());

    let form = LoginForm { email, password };
    // Validation failures never reach the simulated backend
    form.validate()?;

    let session = backend.login(&form.email).await?;

    if output.json {
        return print_json(&session);
    }

    println!(
        "{} Signed in as {} ({})",
        "OK".green(),
        session.email,
        session.role
    );
    Ok(())
}
