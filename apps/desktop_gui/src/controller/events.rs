//! UI/backend events, user intents, and error modeling for the facts controller.

use shared::{
    domain::{CategoryFilter, Fact, FactId, VoteColumn},
    error::{StoreError, ValidationError},
    protocol::FactDraft,
};

/// Completed backend work, delivered to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    Error(UiError),
    FactsLoaded {
        generation: u64,
        filter: CategoryFilter,
        result: Result<Vec<Fact>, StoreError>,
    },
    FactCreated(Result<Fact, StoreError>),
    VoteRecorded {
        fact_id: FactId,
        result: Result<Fact, StoreError>,
    },
}

/// Something the user asked for from a rendered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    ToggleForm,
    SelectCategory(CategoryFilter),
    EditDraft(FactDraft),
    SubmitFact,
    CastVote { fact_id: FactId, column: VoteColumn },
    DismissNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Transport,
    Backend,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadFacts,
    SubmitFact,
    CastVote,
}

impl UiErrorContext {
    fn headline(self) -> &'static str {
        match self {
            UiErrorContext::BackendStartup => "Startup failed",
            UiErrorContext::LoadFacts => "Could not load facts",
            UiErrorContext::SubmitFact => "Could not post fact",
            UiErrorContext::CastVote => "Could not record vote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("401")
            || lower.contains("403")
            || lower.contains("unauthorized")
            || lower.contains("forbidden")
            || lower.contains("api key")
            || lower.contains("jwt")
        {
            UiErrorCategory::Auth
        } else if lower.contains("timeout")
            || lower.contains("timed out")
            || lower.contains("connection")
            || lower.contains("network")
            || lower.contains("disconnected")
            || lower.contains("queue is full")
        {
            UiErrorCategory::Transport
        } else if lower.contains("not configured")
            || lower.contains("invalid")
            || lower.contains("missing")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_store(context: UiErrorContext, err: &StoreError) -> Self {
        let category = match err {
            StoreError::Backend { status, .. } if *status == 401 || *status == 403 => {
                UiErrorCategory::Auth
            }
            StoreError::Backend { .. } | StoreError::RowNotFound(_) => UiErrorCategory::Backend,
            StoreError::Transport(_) | StoreError::Timeout => UiErrorCategory::Transport,
            StoreError::Decode(_) | StoreError::EmptyResponse => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_validation(err: &ValidationError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::SubmitFact,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text: the context headline followed by the message as reported.
    pub fn display_text(&self) -> String {
        format!("{}: {}", self.context.headline(), self.message)
    }
}
