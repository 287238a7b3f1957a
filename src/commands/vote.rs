use owo_colors::OwoColorize;

use crate::commands::{OutputOptions, print_json};
use crate::config::Config;
use crate::display::format_issue_bullet;
use crate::error::{PortalError, Result};
use crate::session::{ActionState, VoteAction, VoteState, reduce_vote_state};
use crate::simulate::{CivicApi, SimulatedBackend};
use crate::store::SessionStore;

/// Options for the community voting flow.
pub struct VoteOptions {
    /// Issue to vote on. When absent, only the similar-issue search runs.
    pub id: Option<u32>,
    pub comment: Option<String>,
    /// Location to search for similar nearby issues.
    pub near: Option<String>,
    pub voter: String,
}

/// Vote on a community issue, optionally listing similar nearby issues
/// first.
pub async fn cmd_vote(options: VoteOptions, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let backend = SimulatedBackend::new(config.latencies.clone());
    let store = SessionStore::seeded();

    if let Some(location) = &options.near {
        let similar = backend.search_similar(location).await?;
        if output.json && options.id.is_none() {
            return print_json(&similar);
        }
        if !output.json {
            println!("{}", format!("Issues reported near {location}:").bold());
            for issue in &similar {
                println!("{}", format_issue_bullet(issue));
            }
            println!();
        }
    }

    let Some(id) = options.id else {
        return Ok(());
    };

    // Verify the issue exists before touching the vote state
    store.issue(id)?;

    let mut state = VoteState::default();
    state = reduce_vote_state(state, VoteAction::Select(id));
    if let Some(comment) = &options.comment {
        state = reduce_vote_state(state, VoteAction::EditComment(comment.clone()));
    }

    if !state.can_vote(id) {
        return Err(PortalError::AlreadyVoted(id));
    }

    let mut action = ActionState::default();
    if !action.begin("Submitting vote...") {
        // Unreachable in a single-shot CLI run, kept for parity with the
        // interactive flow where the control disables while in flight
        return Ok(());
    }
    state = reduce_vote_state(state, VoteAction::Submit);

    backend.submit_vote(id).await?;
    if let Some(comment) = &options.comment {
        backend.add_comment(id, comment).await?;
        store.comment(id, &options.voter, comment, false)?;
    }
    let votes = store.upvote(id)?;

    state = reduce_vote_state(state, VoteAction::SubmitCompleted(id));
    action.finish();

    if output.json {
        return print_json(&store.issue(id)?);
    }

    if let Some(banner) = &state.banner {
        println!("{} {}", "OK".green(), banner.message);
    }
    println!("Issue #{id} now has {votes} votes.");
    Ok(())
}
