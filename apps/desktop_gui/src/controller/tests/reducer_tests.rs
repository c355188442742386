use super::*;
use shared::domain::Category;

use crate::controller::events::UiErrorCategory;

fn fact(id: i64, category: Category, interesting: u32) -> Fact {
    Fact {
        id: FactId(id),
        text: format!("fact {id}"),
        source: format!("https://example.org/{id}"),
        category,
        votes_interesting: interesting,
        votes_mind_blowing: 1,
        votes_false: 2,
        created_in: Some(2020),
        created_at: None,
    }
}

fn loaded_state(facts: Vec<Fact>) -> ViewState {
    let mut state = ViewState::new();
    let BackendCommand::ListFacts { generation, filter } = state.mount() else {
        panic!("mount must list facts");
    };
    state.apply_facts_loaded(generation, filter, Ok(facts));
    state
}

fn error_notice(state: &ViewState) -> &UiError {
    match &state.notice {
        Some(Notice::Error(err)) => err,
        other => panic!("expected error notice, got {other:?}"),
    }
}

fn valid_draft() -> FactDraft {
    FactDraft::new("Octopuses have three hearts", "https://x.com", "science")
}

#[test]
fn mount_starts_loading_all_categories() {
    let mut state = ViewState::new();
    let cmd = state.mount();
    assert_eq!(
        cmd,
        BackendCommand::ListFacts {
            generation: 1,
            filter: CategoryFilter::All
        }
    );
    assert!(state.is_loading);
}

#[test]
fn loaded_facts_replace_list_and_return_to_idle() {
    let state = loaded_state(vec![fact(1, Category::News, 5), fact(2, Category::Health, 2)]);
    assert!(!state.is_loading);
    assert_eq!(state.facts.len(), 2);
}

#[test]
fn changing_category_refetches_with_new_generation() {
    let mut state = loaded_state(vec![fact(1, Category::News, 5)]);
    let cmd = state.set_category(CategoryFilter::Only(Category::Science));
    assert_eq!(
        cmd,
        Some(BackendCommand::ListFacts {
            generation: 2,
            filter: CategoryFilter::Only(Category::Science)
        })
    );
    assert!(state.is_loading);
    assert_eq!(state.current_category, CategoryFilter::Only(Category::Science));
}

#[test]
fn selecting_current_category_again_is_a_no_op() {
    let mut state = loaded_state(vec![fact(1, Category::News, 5)]);
    assert_eq!(state.set_category(CategoryFilter::All), None);
    assert!(!state.is_loading);
}

#[test]
fn stale_list_response_is_ignored() {
    let mut state = loaded_state(Vec::new());
    state.set_category(CategoryFilter::Only(Category::Science));
    state.set_category(CategoryFilter::Only(Category::History));

    // The history response arrives first, then the superseded science one.
    state.apply_facts_loaded(
        3,
        CategoryFilter::Only(Category::History),
        Ok(vec![fact(9, Category::History, 1)]),
    );
    state.apply_facts_loaded(
        2,
        CategoryFilter::Only(Category::Science),
        Ok(vec![fact(4, Category::Science, 8)]),
    );

    assert!(!state.is_loading);
    assert_eq!(state.facts, vec![fact(9, Category::History, 1)]);
}

#[test]
fn stale_response_does_not_end_loading_for_current_filter() {
    let mut state = loaded_state(Vec::new());
    state.set_category(CategoryFilter::Only(Category::Science));
    state.set_category(CategoryFilter::Only(Category::History));

    state.apply_facts_loaded(2, CategoryFilter::Only(Category::Science), Ok(Vec::new()));
    assert!(state.is_loading);
}

#[test]
fn failed_list_keeps_previous_facts_and_surfaces_error() {
    let mut state = loaded_state(vec![fact(1, Category::News, 5)]);
    state.set_category(CategoryFilter::Only(Category::Finance));
    state.apply_facts_loaded(
        2,
        CategoryFilter::Only(Category::Finance),
        Err(StoreError::Transport("connection refused".to_string())),
    );

    assert!(!state.is_loading);
    assert_eq!(state.facts, vec![fact(1, Category::News, 5)]);
    let err = error_notice(&state);
    assert_eq!(err.context(), UiErrorContext::LoadFacts);
    assert_eq!(err.category(), UiErrorCategory::Transport);
}

#[test]
fn header_toggles_form_visibility() {
    let mut state = ViewState::new();
    assert_eq!(state.apply_intent(UiIntent::ToggleForm), None);
    assert!(state.show_form);
    state.apply_intent(UiIntent::ToggleForm);
    assert!(!state.show_form);
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let cases = [
        FactDraft::new("", "https://x.com", "science"),
        FactDraft::new("a".repeat(201), "https://x.com", "science"),
        FactDraft::new("fact", "not-a-url", "science"),
        FactDraft::new("fact", "https://x.com", ""),
    ];
    for draft in cases {
        let mut state = loaded_state(Vec::new());
        state.show_form = true;
        state.edit_draft(draft.clone());

        assert_eq!(state.submit_fact(), None, "draft {draft:?} must be rejected");
        assert!(state.show_form);
        assert!(!state.form.is_uploading);
        assert_eq!(state.form.draft, draft);
        assert_eq!(error_notice(&state).category(), UiErrorCategory::Validation);
    }
}

#[test]
fn successful_submit_prepends_fact_and_closes_form() {
    let mut state = loaded_state(vec![fact(1, Category::News, 50)]);
    state.show_form = true;
    state.edit_draft(valid_draft());

    let cmd = state.submit_fact().expect("create command");
    let BackendCommand::CreateFact { fact: new_fact } = cmd else {
        panic!("unexpected command");
    };
    assert_eq!(new_fact.category, Category::Science);
    assert!(state.form.is_uploading);

    let created = Fact {
        id: FactId(99),
        text: new_fact.text,
        source: new_fact.source,
        category: new_fact.category,
        votes_interesting: 0,
        votes_mind_blowing: 0,
        votes_false: 0,
        created_in: None,
        created_at: None,
    };
    state.apply_fact_created(Ok(created.clone()));

    assert_eq!(state.facts[0], created);
    assert_eq!(state.facts.len(), 2);
    assert!(!state.show_form);
    assert!(!state.form.is_uploading);
    assert_eq!(state.form.draft, FactDraft::default());
}

#[test]
fn second_submit_while_uploading_is_ignored() {
    let mut state = loaded_state(Vec::new());
    state.edit_draft(valid_draft());
    assert!(state.submit_fact().is_some());
    assert_eq!(state.submit_fact(), None);

    state.edit_draft(FactDraft::default());
    assert_eq!(state.form.draft, valid_draft());
}

#[test]
fn failed_submit_keeps_form_open_and_populated() {
    let mut state = loaded_state(vec![fact(1, Category::News, 5)]);
    state.show_form = true;
    state.edit_draft(valid_draft());
    state.submit_fact().expect("create command");

    state.apply_fact_created(Err(StoreError::backend(400, "value too long for type")));

    assert!(state.show_form);
    assert!(!state.form.is_uploading);
    assert_eq!(state.form.draft, valid_draft());
    assert_eq!(state.facts, vec![fact(1, Category::News, 5)]);
    assert_eq!(error_notice(&state).message(), "value too long for type");
}

#[test]
fn successful_vote_replaces_only_the_matching_fact() {
    let facts = vec![
        fact(1, Category::News, 5),
        fact(2, Category::History, 4),
        fact(3, Category::Health, 3),
    ];
    let mut state = loaded_state(facts.clone());

    let cmd = state.cast_vote(FactId(2), VoteColumn::False).expect("vote");
    assert_eq!(
        cmd,
        BackendCommand::IncrementVote {
            fact: facts[1].clone(),
            column: VoteColumn::False
        }
    );

    let mut updated = facts[1].clone();
    updated.votes_false += 1;
    state.apply_vote_recorded(FactId(2), Ok(updated));

    assert_eq!(state.facts[1].votes_false, facts[1].votes_false + 1);
    assert_eq!(state.facts[0], facts[0]);
    assert_eq!(state.facts[2], facts[2]);
    assert!(!state.is_vote_pending(FactId(2)));
}

#[test]
fn failed_vote_leaves_facts_untouched() {
    let facts = vec![fact(1, Category::News, 5), fact(2, Category::History, 4)];
    let mut state = loaded_state(facts.clone());

    state.cast_vote(FactId(1), VoteColumn::Interesting).expect("vote");
    state.apply_vote_recorded(FactId(1), Err(StoreError::Timeout));

    assert_eq!(state.facts, facts);
    assert!(!state.is_vote_pending(FactId(1)));
    assert_eq!(error_notice(&state).context(), UiErrorContext::CastVote);
}

#[test]
fn duplicate_vote_on_pending_fact_is_ignored() {
    let mut state = loaded_state(vec![fact(1, Category::News, 5)]);
    assert!(state.cast_vote(FactId(1), VoteColumn::Interesting).is_some());
    assert_eq!(state.cast_vote(FactId(1), VoteColumn::MindBlowing), None);
    assert!(state.cast_vote(FactId(404), VoteColumn::False).is_none());
}

#[test]
fn vote_result_matches_by_id_after_list_reorder() {
    let mut state = loaded_state(vec![fact(1, Category::News, 5), fact(2, Category::News, 4)]);
    state.cast_vote(FactId(2), VoteColumn::Interesting).expect("vote");

    // A new fact is prepended while the vote is in flight.
    state.facts.insert(0, fact(3, Category::Science, 0));
    let mut updated = fact(2, Category::News, 4);
    updated.votes_interesting = 5;
    state.apply_vote_recorded(FactId(2), Ok(updated.clone()));

    assert_eq!(state.facts[2], updated);
    assert_eq!(state.facts[1], fact(1, Category::News, 5));
}

#[test]
fn dismissing_clears_notice() {
    let mut state = ViewState::new();
    state.apply_event(UiEvent::Error(UiError::from_message(
        UiErrorContext::BackendStartup,
        "network unreachable",
    )));
    assert_eq!(error_notice(&state).category(), UiErrorCategory::Transport);
    state.apply_intent(UiIntent::DismissNotice);
    assert!(state.notice.is_none());
}
