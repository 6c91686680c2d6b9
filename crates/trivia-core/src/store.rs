//! The store adapter trait.
//!
//! This async trait is the boundary between the core and whatever holds the
//! questions durably. The `trivia-store` crate provides the in-memory and
//! JSON-file implementations.

use async_trait::async_trait;

use crate::error::TriviaError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Durable read/write access to questions and categories.
///
/// Contract requirements every implementation must uphold:
///
/// - Every listing (`list_all`, `list_by_category`, `search`,
///   `list_categories`) is ordered ascending by id and stable across calls
///   for the same underlying data.
/// - `search` matches a case-insensitive substring against question text
///   only, never against answers. This is part of the contract, not an
///   implementation detail.
/// - `create` assigns the next id, rejects submissions that fail
///   [`NewQuestion::validate`], and fails with `CategoryNotFound` when the
///   submission references an unknown category.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, ascending by id.
    async fn list_all(&self) -> Result<Vec<Question>, TriviaError>;

    /// Questions belonging to one category, ascending by id. An unknown
    /// category yields an empty listing, not an error — resolving category
    /// ids is the caller's concern.
    async fn list_by_category(&self, category: CategoryId)
        -> Result<Vec<Question>, TriviaError>;

    /// Questions whose text contains `term`, case-insensitively.
    async fn search(&self, term: &str) -> Result<Vec<Question>, TriviaError>;

    /// A single question by id.
    async fn get(&self, id: QuestionId) -> Result<Question, TriviaError>;

    /// Remove a question permanently.
    async fn delete(&self, id: QuestionId) -> Result<(), TriviaError>;

    /// Persist a new question and return it with its assigned id.
    async fn create(&self, new: NewQuestion) -> Result<Question, TriviaError>;

    /// All categories, ascending by id.
    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError>;
}
