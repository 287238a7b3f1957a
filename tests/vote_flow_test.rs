//! End-to-end voting flow tests.
//!
//! These complement the reducer unit tests in `src/session/vote.rs` by
//! driving full action sequences through the simulated backend and the
//! session store together.

mod common;

use civic_connect::session::{ActionState, VoteAction, VoteState, reduce_vote_state};
use civic_connect::simulate::{CivicApi, SimulatedBackend};
use civic_connect::store::SessionStore;

// ============================================================================
// Reducer action sequences
// ============================================================================

#[test]
fn test_full_vote_sequence() {
    let mut state = VoteState::default();
    state = reduce_vote_state(state, VoteAction::Select(3));
    state = reduce_vote_state(state, VoteAction::EditComment("Same here".to_string()));
    state = reduce_vote_state(state, VoteAction::Submit);
    assert!(state.submitting);

    state = reduce_vote_state(state, VoteAction::SubmitCompleted(3));
    assert!(state.has_voted(3));
    assert!(state.comment.is_empty());
    assert!(state.banner.is_some());
}

#[test]
fn test_committed_vote_makes_reselect_and_resubmit_noops() {
    let mut state = VoteState::default();
    state = reduce_vote_state(state, VoteAction::Select(3));
    state = reduce_vote_state(state, VoteAction::Submit);
    state = reduce_vote_state(state, VoteAction::SubmitCompleted(3));

    // Re-select of the committed id is ignored
    let after_select = reduce_vote_state(state.clone(), VoteAction::Select(3));
    assert_eq!(after_select.selected, None);

    // Submit with no selection is ignored
    let after_submit = reduce_vote_state(after_select, VoteAction::Submit);
    assert!(!after_submit.submitting);
    assert!(after_submit.has_voted(3));
}

#[test]
fn test_double_submit_produces_one_vote_commit() {
    let mut state = VoteState::default();
    state = reduce_vote_state(state, VoteAction::Select(2));
    state = reduce_vote_state(state, VoteAction::Submit);
    // A second submit while in flight changes nothing
    state = reduce_vote_state(state, VoteAction::Submit);
    state = reduce_vote_state(state, VoteAction::SubmitCompleted(2));

    assert_eq!(state.voted.len(), 1);
}

#[test]
fn test_voting_on_second_issue_after_first_commits() {
    let mut state = VoteState::default();
    for id in [2, 4] {
        state = reduce_vote_state(state, VoteAction::Select(id));
        state = reduce_vote_state(state, VoteAction::Submit);
        state = reduce_vote_state(state, VoteAction::SubmitCompleted(id));
        state = reduce_vote_state(state, VoteAction::DismissBanner);
    }
    assert!(state.has_voted(2));
    assert!(state.has_voted(4));
    assert!(state.banner.is_none());
}

// ============================================================================
// Backend + store integration
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_vote_flow_updates_the_store() {
    let backend = SimulatedBackend::instant();
    let store = SessionStore::seeded();

    let mut state = VoteState::default();
    let id = 2;
    state = reduce_vote_state(state, VoteAction::Select(id));
    state = reduce_vote_state(state, VoteAction::Submit);

    let before = store.issue(id).unwrap().upvotes;
    backend.submit_vote(id).await.unwrap();
    let after = store.upvote(id).unwrap();
    state = reduce_vote_state(state, VoteAction::SubmitCompleted(id));

    assert_eq!(after, before + 1);
    assert!(state.has_voted(id));
}

#[tokio::test(start_paused = true)]
async fn test_vote_with_comment_appends_to_thread() {
    let backend = SimulatedBackend::instant();
    let store = SessionStore::seeded();

    let id = 4;
    let before = store.issue(id).unwrap().comments.len();
    backend.submit_vote(id).await.unwrap();
    backend.add_comment(id, "This needs attention").await.unwrap();
    store.comment(id, "Priya Mehta", "This needs attention", false).unwrap();
    store.upvote(id).unwrap();

    let issue = store.issue(id).unwrap();
    assert_eq!(issue.comments.len(), before + 1);
    assert_eq!(issue.comments.last().unwrap().text, "This needs attention");
}

#[test]
fn test_action_guard_blocks_second_trigger_until_finish() {
    let mut guard = ActionState::default();
    assert!(guard.begin("Submitting vote..."));
    assert!(!guard.begin("Submitting vote..."));
    guard.finish();
    assert!(guard.begin("Submitting vote..."));
}
