use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::domain::{Category, CategoryFilter, VoteColumn};

/// Row cap applied to every list request.
pub const FACT_ROW_LIMIT: usize = 1500;

/// Unvalidated submission as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactDraft {
    pub text: String,
    pub source: String,
    pub category: String,
}

impl FactDraft {
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            category: category.into(),
        }
    }

    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Insert payload for the facts table. Vote counters are left to the store defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFact {
    pub text: String,
    pub source: String,
    pub category: Category,
}

/// Single-column vote update, serialized as `{"<column>": value}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotePatch {
    pub column: VoteColumn,
    pub value: u32,
}

impl Serialize for VotePatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.column.column_name(), &self.value)?;
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactQuery {
    pub filter: CategoryFilter,
    pub order_by: VoteColumn,
    pub descending: bool,
    pub limit: usize,
}

impl FactQuery {
    /// Most interesting first, capped at [`FACT_ROW_LIMIT`].
    pub fn listing(filter: CategoryFilter) -> Self {
        Self {
            filter,
            order_by: VoteColumn::Interesting,
            descending: true,
            limit: FACT_ROW_LIMIT,
        }
    }
}

/// Error body returned by the hosted store on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
