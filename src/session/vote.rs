//! Community voting model types for testable state management.
//!
//! Separates the voting state from any rendering concern so the whole
//! select/submit/dedup flow can be unit tested as a pure reducer.

use std::collections::HashSet;

use crate::session::Banner;

/// Raw state of the community voting session.
#[derive(Debug, Clone, Default)]
pub struct VoteState {
    /// Currently selected issue, if any. A new selection silently
    /// replaces the old one; there is never more than one.
    pub selected: Option<u32>,
    /// Draft comment attached to the next vote submission.
    pub comment: String,
    /// Whether a vote submission is currently in flight.
    pub submitting: bool,
    /// Issue ids this session has already voted on. Sticky for the
    /// lifetime of the session; there is no way to retract a vote.
    pub voted: HashSet<u32>,
    /// Transient success banner raised after a completed vote.
    pub banner: Option<Banner>,
}

impl VoteState {
    /// Whether the vote control for `id` should be enabled.
    pub fn can_vote(&self, id: u32) -> bool {
        !self.voted.contains(&id) && !self.submitting
    }

    pub fn has_voted(&self, id: u32) -> bool {
        self.voted.contains(&id)
    }
}

/// All possible actions on the voting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteAction {
    /// Select an issue to vote on.
    Select(u32),
    /// Update the draft comment text.
    EditComment(String),
    /// Begin submitting the vote for the selected issue.
    Submit,
    /// The simulated submission for `id` resolved.
    SubmitCompleted(u32),
    /// Dismiss the success banner (either manually or on expiry).
    DismissBanner,
}

/// Pure reducer for the voting session.
///
/// Every transition not listed for the current state is a silent no-op:
/// selecting an already-voted issue, submitting with nothing selected,
/// and submitting while a submission is in flight all leave the state
/// unchanged.
pub fn reduce_vote_state(mut state: VoteState, action: VoteAction) -> VoteState {
    match action {
        VoteAction::Select(id) => {
            if !state.submitting && !state.voted.contains(&id) {
                state.selected = Some(id);
            }
        }
        VoteAction::EditComment(text) => {
            if !state.submitting {
                state.comment = text;
            }
        }
        VoteAction::Submit => {
            if state.selected.is_some() && !state.submitting {
                state.submitting = true;
            }
        }
        VoteAction::SubmitCompleted(id) => {
            state.voted.insert(id);
            state.submitting = false;
            state.selected = None;
            state.comment.clear();
            state.banner = Some(Banner::success("Vote submitted successfully!"));
        }
        VoteAction::DismissBanner => {
            state.banner = None;
        }
    }
    state
}
