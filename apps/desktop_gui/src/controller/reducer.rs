//! State transitions for intents and backend results.
//!
//! Every transition runs on the UI thread. Transitions that need the store
//! return the [`BackendCommand`] to queue; results come back as [`UiEvent`]s.

use client_core::validation::validate_draft;
use shared::{
    domain::{CategoryFilter, Fact, FactId, VoteColumn},
    error::StoreError,
    protocol::FactDraft,
};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiError, UiErrorContext, UiEvent, UiIntent},
        state::{Notice, ViewState},
    },
};

impl ViewState {
    /// Initial load for the current filter.
    pub fn mount(&mut self) -> BackendCommand {
        self.begin_fetch()
    }

    pub fn apply_intent(&mut self, intent: UiIntent) -> Option<BackendCommand> {
        match intent {
            UiIntent::ToggleForm => {
                self.toggle_form();
                None
            }
            UiIntent::SelectCategory(filter) => self.set_category(filter),
            UiIntent::EditDraft(draft) => {
                self.edit_draft(draft);
                None
            }
            UiIntent::SubmitFact => self.submit_fact(),
            UiIntent::CastVote { fact_id, column } => self.cast_vote(fact_id, column),
            UiIntent::DismissNotice => {
                self.dismiss_notice();
                None
            }
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Error(err) => self.surface_error(err),
            UiEvent::FactsLoaded {
                generation,
                filter,
                result,
            } => self.apply_facts_loaded(generation, filter, result),
            UiEvent::FactCreated(result) => self.apply_fact_created(result),
            UiEvent::VoteRecorded { fact_id, result } => {
                self.apply_vote_recorded(fact_id, result)
            }
        }
    }

    pub fn set_category(&mut self, filter: CategoryFilter) -> Option<BackendCommand> {
        if filter == self.current_category && self.fetch_generation > 0 {
            return None;
        }
        self.current_category = filter;
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> BackendCommand {
        self.fetch_generation += 1;
        self.is_loading = true;
        BackendCommand::ListFacts {
            generation: self.fetch_generation,
            filter: self.current_category,
        }
    }

    pub fn apply_facts_loaded(
        &mut self,
        generation: u64,
        filter: CategoryFilter,
        result: Result<Vec<Fact>, StoreError>,
    ) {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                current = self.fetch_generation,
                filter = %filter,
                "dropping superseded fact list"
            );
            return;
        }
        self.is_loading = false;
        match result {
            Ok(facts) => self.facts = facts,
            Err(err) => {
                self.surface_error(UiError::from_store(UiErrorContext::LoadFacts, &err));
            }
        }
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    pub fn edit_draft(&mut self, draft: FactDraft) {
        if self.form.is_uploading {
            return;
        }
        self.form.draft = draft;
    }

    pub fn submit_fact(&mut self) -> Option<BackendCommand> {
        if self.form.is_uploading {
            return None;
        }
        match validate_draft(&self.form.draft) {
            Ok(fact) => {
                self.form.is_uploading = true;
                self.notice = None;
                Some(BackendCommand::CreateFact { fact })
            }
            Err(err) => {
                tracing::debug!("rejected draft locally: {err}");
                self.surface_error(UiError::from_validation(&err));
                None
            }
        }
    }

    pub fn apply_fact_created(&mut self, result: Result<Fact, StoreError>) {
        self.form.is_uploading = false;
        match result {
            Ok(fact) => {
                self.facts.insert(0, fact);
                self.form.draft = FactDraft::default();
                self.show_form = false;
            }
            Err(err) => {
                self.surface_error(UiError::from_store(UiErrorContext::SubmitFact, &err));
            }
        }
    }

    pub fn cast_vote(&mut self, fact_id: FactId, column: VoteColumn) -> Option<BackendCommand> {
        if self.is_vote_pending(fact_id) {
            return None;
        }
        let fact = self.fact(fact_id)?.clone();
        self.pending_votes.insert(fact_id);
        Some(BackendCommand::IncrementVote { fact, column })
    }

    pub fn apply_vote_recorded(&mut self, fact_id: FactId, result: Result<Fact, StoreError>) {
        self.pending_votes.remove(&fact_id);
        match result {
            Ok(updated) => {
                if let Some(slot) = self.facts.iter_mut().find(|fact| fact.id == fact_id) {
                    *slot = updated;
                }
            }
            Err(err) => {
                self.surface_error(UiError::from_store(UiErrorContext::CastVote, &err));
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn surface_error(&mut self, err: UiError) {
        tracing::warn!(
            context = ?err.context(),
            category = ?err.category(),
            "{}",
            err.message()
        );
        self.notice = Some(Notice::Error(err));
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
