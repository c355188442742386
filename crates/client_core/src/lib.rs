use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    domain::{CategoryFilter, Fact, FactId, VoteColumn},
    error::StoreError,
    protocol::{FactQuery, NewFact, VotePatch},
};
use tracing::{info, warn};

pub mod config;
pub mod store;
pub mod validation;

pub use config::{load_settings, SettingsOverrides, StoreSettings};
pub use store::PostgrestFactStore;

/// Row-level access to the hosted facts table. Every call returns the affected rows.
#[async_trait]
pub trait FactStore: Send + Sync {
    async fn select(&self, query: &FactQuery) -> Result<Vec<Fact>, StoreError>;
    async fn insert(&self, fact: &NewFact) -> Result<Vec<Fact>, StoreError>;
    async fn update(&self, id: FactId, patch: VotePatch) -> Result<Vec<Fact>, StoreError>;
}

/// Translates UI intents into store calls and normalizes what comes back.
#[derive(Clone)]
pub struct FactRepository {
    store: Arc<dyn FactStore>,
}

impl FactRepository {
    pub fn new(store: Arc<dyn FactStore>) -> Self {
        Self { store }
    }

    pub fn from_settings(settings: &StoreSettings) -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(PostgrestFactStore::new(settings)?)))
    }

    pub async fn list_facts(&self, filter: CategoryFilter) -> Result<Vec<Fact>, StoreError> {
        let query = FactQuery::listing(filter);
        let mut facts = self.store.select(&query).await?;
        if facts.len() > query.limit {
            warn!(
                returned = facts.len(),
                limit = query.limit,
                "store ignored the row limit; truncating"
            );
            facts.truncate(query.limit);
        }
        info!(filter = %filter, count = facts.len(), "listed facts");
        Ok(facts)
    }

    pub async fn create_fact(&self, fact: NewFact) -> Result<Fact, StoreError> {
        let created = self
            .store
            .insert(&fact)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::EmptyResponse)?;
        info!(fact_id = created.id.0, category = %created.category, "created fact");
        Ok(created)
    }

    /// Writes `local value + 1` for `column`. The value comes from the caller's
    /// copy of the fact, so two clients voting from the same snapshot both write
    /// the same number and one increment is lost.
    pub async fn increment_vote(
        &self,
        fact: &Fact,
        column: VoteColumn,
    ) -> Result<Fact, StoreError> {
        let patch = VotePatch {
            column,
            value: fact.votes(column).saturating_add(1),
        };
        let updated = self
            .store
            .update(fact.id, patch)
            .await?
            .into_iter()
            .find(|row| row.id == fact.id)
            .ok_or(StoreError::RowNotFound(fact.id.0))?;
        info!(
            fact_id = fact.id.0,
            column = %column,
            value = updated.votes(column),
            "recorded vote"
        );
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
