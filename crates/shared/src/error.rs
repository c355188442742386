use thiserror::Error;

use crate::domain::MAX_FACT_TEXT_CHARS;

/// Local rejection of a draft. Never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("fact text must not be empty")]
    EmptyText,
    #[error("fact text is {len} characters; the limit is {max}")]
    TextTooLong { len: usize, max: usize },
    #[error("source must be an absolute http or https URL")]
    InvalidSource,
    #[error("choose a category")]
    MissingCategory,
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

impl ValidationError {
    pub fn too_long(len: usize) -> Self {
        Self::TextTooLong {
            len,
            max: MAX_FACT_TEXT_CHARS,
        }
    }
}

/// Failure talking to the hosted store. Reported once, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{message}")]
    Backend {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("network error: {0}")]
    Transport(String),
    #[error("request to the fact store timed out")]
    Timeout,
    #[error("unexpected response from the fact store: {0}")]
    Decode(String),
    #[error("the fact store returned no rows")]
    EmptyResponse,
    #[error("fact {0} not found")]
    RowNotFound(i64),
}

impl StoreError {
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            code: None,
            message: message.into(),
        }
    }
}
