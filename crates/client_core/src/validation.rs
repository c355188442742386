//! Local checks applied to a draft before anything is sent to the store.

use shared::{
    domain::{Category, MAX_FACT_TEXT_CHARS},
    error::ValidationError,
    protocol::{FactDraft, NewFact},
};
use url::Url;

pub fn validate_draft(draft: &FactDraft) -> Result<NewFact, ValidationError> {
    if draft.text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let len = draft.text_len();
    if len > MAX_FACT_TEXT_CHARS {
        return Err(ValidationError::too_long(len));
    }
    let source = draft.source.trim();
    if !is_valid_http_url(source) {
        return Err(ValidationError::InvalidSource);
    }
    let category: Category = draft.category.parse()?;

    Ok(NewFact {
        text: draft.text.clone(),
        source: source.to_string(),
        category,
    })
}

pub fn is_valid_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Characters left before the text limit; negative once the draft is over it.
pub fn remaining_chars(draft: &FactDraft) -> i64 {
    MAX_FACT_TEXT_CHARS as i64 - draft.text_len() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, source: &str, category: &str) -> FactDraft {
        FactDraft::new(text, source, category)
    }

    #[test]
    fn accepts_well_formed_draft() {
        let fact = validate_draft(&draft(
            "Lisbon is the capital of Portugal",
            " https://x.com ",
            "society",
        ))
        .expect("valid");
        assert_eq!(fact.source, "https://x.com");
        assert_eq!(fact.category, Category::Society);
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(
            validate_draft(&draft("", "https://x.com", "science")),
            Err(ValidationError::EmptyText)
        );
        assert_eq!(
            validate_draft(&draft("   ", "https://x.com", "science")),
            Err(ValidationError::EmptyText)
        );
    }

    #[test]
    fn enforces_text_limit_in_characters() {
        let exactly = "é".repeat(MAX_FACT_TEXT_CHARS);
        assert!(validate_draft(&draft(&exactly, "https://x.com", "news")).is_ok());

        let over = "a".repeat(MAX_FACT_TEXT_CHARS + 1);
        assert_eq!(
            validate_draft(&draft(&over, "https://x.com", "news")),
            Err(ValidationError::TextTooLong { len: 201, max: 200 })
        );
    }

    #[test]
    fn rejects_non_http_sources() {
        for source in ["not-a-url", "", "ftp://x.com/file", "mailto:a@b.c", "/relative"] {
            assert_eq!(
                validate_draft(&draft("fact", source, "health")),
                Err(ValidationError::InvalidSource),
                "source {source:?} should be rejected"
            );
        }
        assert!(is_valid_http_url("http://example.org/a?b=c"));
        assert!(is_valid_http_url("https://x.com"));
    }

    #[test]
    fn rejects_missing_or_unknown_category() {
        assert_eq!(
            validate_draft(&draft("fact", "https://x.com", "")),
            Err(ValidationError::MissingCategory)
        );
        assert_eq!(
            validate_draft(&draft("fact", "https://x.com", "gossip")),
            Err(ValidationError::UnknownCategory("gossip".to_string()))
        );
    }

    #[test]
    fn counts_remaining_characters() {
        assert_eq!(remaining_chars(&draft("", "", "")), 200);
        assert_eq!(remaining_chars(&draft("hello", "", "")), 195);
        assert_eq!(remaining_chars(&draft(&"x".repeat(205), "", "")), -5);
    }
}
