use owo_colors::OwoColorize;

use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::forms::AdminRegisterForm;
use crate::simulate::{CivicApi, SimulatedBackend};

/// Options for administrator self-registration.
pub struct RegisterOptions {
    pub name: String,
    pub email: String,
    pub department: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

/// Register an administrator account and print the resulting session.
pub async fn cmd_register(options: RegisterOptions, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let backend = SimulatedBackend::new(config.latencies.clone());

    let form = AdminRegisterForm {
        name: options.name,
        email: options.email,
        department: options.department,
        password: options.password,
        confirm_password: options.confirm_password,
        agreed_to_terms: options.agree_terms,
    };
    // Validation failures never reach the simulated backend
    form.validate()?;

    let session = backend.register_admin(&form.email).await?;

    if output.json {
        return print_json(&session);
    }

    println!(
        "{} Administrator account created for {} ({})",
        "OK".green(),
        session.email,
        session.role
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_options() -> RegisterOptions {
        RegisterOptions {
            name: "Sanjay Malhotra".to_string(),
            email: "sanjay.malhotra@example.com".to_string(),
            department: "Municipal Administration".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            agree_terms: true,
        }
    }

    #[tokio::test]
    async fn test_register_rejects_mismatched_passwords() {
        let options = RegisterOptions {
            confirm_password: "different".to_string(),
            ..complete_options()
        };
        let err = cmd_register(options, OutputOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[tokio::test]
    async fn test_register_rejects_missing_department() {
        let options = RegisterOptions {
            department: String::new(),
            ..complete_options()
        };
        let err = cmd_register(options, OutputOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }
}
