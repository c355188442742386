use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(FactId);

/// Maximum number of characters accepted for a fact's text.
pub const MAX_FACT_TEXT_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Science,
    Finance,
    Society,
    Entertainment,
    Health,
    History,
    News,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Science,
        Category::Finance,
        Category::Society,
        Category::Entertainment,
        Category::Health,
        Category::History,
        Category::News,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Science => "science",
            Category::Finance => "finance",
            Category::Society => "society",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::History => "history",
            Category::News => "news",
        }
    }

    /// Display color as `0xRRGGBB`.
    pub fn color(self) -> u32 {
        match self {
            Category::Technology => 0x3b82f6,
            Category::Science => 0x16a34a,
            Category::Finance => 0xef4444,
            Category::Society => 0xeab308,
            Category::Entertainment => 0xdb2777,
            Category::Health => 0x14b8a6,
            Category::History => 0xf97316,
            Category::News => 0x8b5cf6,
        }
    }

    /// Name with its first letter upper-cased, as shown in the category picker.
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.name() == trimmed)
            .ok_or_else(|| ValidationError::UnknownCategory(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn category(self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteColumn {
    Interesting,
    MindBlowing,
    False,
}

impl VoteColumn {
    pub const ALL: [VoteColumn; 3] = [
        VoteColumn::Interesting,
        VoteColumn::MindBlowing,
        VoteColumn::False,
    ];

    /// Column name in the facts table.
    pub fn column_name(self) -> &'static str {
        match self {
            VoteColumn::Interesting => "votesInteresting",
            VoteColumn::MindBlowing => "votesMindBlowing",
            VoteColumn::False => "votesFalse",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            VoteColumn::Interesting => "👍",
            VoteColumn::MindBlowing => "🤯",
            VoteColumn::False => "⛔️",
        }
    }
}

impl fmt::Display for VoteColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A row of the facts table as the store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: FactId,
    pub text: String,
    pub source: String,
    pub category: Category,
    #[serde(rename = "votesInteresting", default)]
    pub votes_interesting: u32,
    #[serde(rename = "votesMindBlowing", default)]
    pub votes_mind_blowing: u32,
    #[serde(rename = "votesFalse", default)]
    pub votes_false: u32,
    #[serde(rename = "createdIn", default, skip_serializing_if = "Option::is_none")]
    pub created_in: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Fact {
    pub fn is_disputed(&self) -> bool {
        u64::from(self.votes_interesting) + u64::from(self.votes_mind_blowing)
            < u64::from(self.votes_false)
    }

    pub fn votes(&self, column: VoteColumn) -> u32 {
        match column {
            VoteColumn::Interesting => self.votes_interesting,
            VoteColumn::MindBlowing => self.votes_mind_blowing,
            VoteColumn::False => self.votes_false,
        }
    }
}
