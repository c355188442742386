//! View state owned by the controller. Render code only reads it.

use std::collections::HashSet;

use shared::{
    domain::{CategoryFilter, Fact, FactId},
    protocol::FactDraft,
};

use crate::controller::events::UiError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: FactDraft,
    pub is_uploading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(UiError),
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub facts: Vec<Fact>,
    pub is_loading: bool,
    pub current_category: CategoryFilter,
    pub show_form: bool,
    pub form: FormState,
    pub pending_votes: HashSet<FactId>,
    pub notice: Option<Notice>,
    pub(crate) fetch_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_vote_pending(&self, fact_id: FactId) -> bool {
        self.pending_votes.contains(&fact_id)
    }

    pub fn fact(&self, fact_id: FactId) -> Option<&Fact> {
        self.facts.iter().find(|fact| fact.id == fact_id)
    }

    pub fn has_pending_work(&self) -> bool {
        self.is_loading || self.form.is_uploading || !self.pending_votes.is_empty()
    }
}
