//! Domain error types.
//!
//! Defined in `trivia-core` so hosts can classify errors for status mapping
//! without string matching. The end-of-quiz outcome is deliberately NOT
//! represented here — running out of questions is a normal result
//! (`Ok(None)` from the selector), not a failure.

use thiserror::Error;

use crate::model::{CategoryId, QuestionId};

/// Errors that can occur in the trivia core.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// No question exists with the given id.
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    /// No category exists with the given id.
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),

    /// The requested page lies beyond the available data.
    #[error("page {page} is out of range")]
    PageOutOfRange { page: usize },

    /// A submission failed validation (empty text/answer, bad difficulty).
    #[error("validation failed: {0}")]
    Invalid(String),

    /// An opaque fault in the backing store, propagated for the host to
    /// classify. The core never retries or swallows these.
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl TriviaError {
    /// Returns `true` for the not-found family (unknown question, unknown
    /// category, page beyond range). A transport maps these to 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TriviaError::QuestionNotFound(_)
                | TriviaError::CategoryNotFound(_)
                | TriviaError::PageOutOfRange { .. }
        )
    }

    /// Returns `true` if this error came from input validation.
    pub fn is_invalid(&self) -> bool {
        matches!(self, TriviaError::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(TriviaError::QuestionNotFound(4).is_not_found());
        assert!(TriviaError::CategoryNotFound(9).is_not_found());
        assert!(TriviaError::PageOutOfRange { page: 5 }.is_not_found());
        assert!(!TriviaError::Invalid("x".into()).is_not_found());
        assert!(!TriviaError::Store(anyhow::anyhow!("io")).is_not_found());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            TriviaError::QuestionNotFound(18).to_string(),
            "question 18 not found"
        );
        assert_eq!(
            TriviaError::PageOutOfRange { page: 5 }.to_string(),
            "page 5 is out of range"
        );
    }
}
