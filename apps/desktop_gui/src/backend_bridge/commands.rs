//! Backend commands queued from UI to backend worker.

use shared::{
    domain::{CategoryFilter, Fact, VoteColumn},
    error::StoreError,
    protocol::NewFact,
};

use crate::controller::events::UiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ListFacts {
        generation: u64,
        filter: CategoryFilter,
    },
    CreateFact {
        fact: NewFact,
    },
    /// Carries the UI's copy of the fact; the new count is derived from it.
    IncrementVote {
        fact: Fact,
        column: VoteColumn,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ListFacts { .. } => "list_facts",
            BackendCommand::CreateFact { .. } => "create_fact",
            BackendCommand::IncrementVote { .. } => "increment_vote",
        }
    }

    /// The event the controller would have received had this command failed with `err`.
    pub fn into_failed_event(self, err: StoreError) -> UiEvent {
        match self {
            BackendCommand::ListFacts { generation, filter } => UiEvent::FactsLoaded {
                generation,
                filter,
                result: Err(err),
            },
            BackendCommand::CreateFact { .. } => UiEvent::FactCreated(Err(err)),
            BackendCommand::IncrementVote { fact, .. } => UiEvent::VoteRecorded {
                fact_id: fact.id,
                result: Err(err),
            },
        }
    }
}
