use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::simulate::{CivicApi, SimulatedBackend};

/// Send one message to the support assistant and print its reply.
pub async fn cmd_chat(message: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let backend = SimulatedBackend::new(config.latencies.clone());

    let reply = backend.chat(message).await?;

    if output.json {
        return print_json(&serde_json::json!({
            "message": message,
            "reply": reply,
        }));
    }

    println!("{reply}");
    Ok(())
}
