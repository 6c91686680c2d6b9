//! The transport-agnostic service layer.
//!
//! `TriviaService` is the thin orchestration boundary a host (HTTP handler,
//! CLI command, test harness) calls into. It owns response shaping for
//! pagination, category scoping, search, and quiz draws, while the host
//! owns transport, status mapping, and session policy such as the per-game
//! question cap.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::error::TriviaError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizState};
use crate::pagination::{paginate, DEFAULT_PAGE_SIZE};
use crate::quiz;
use crate::store::QuestionStore;

/// Configuration for the service layer.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Questions per page in listings.
    pub page_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of the full question listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionList {
    pub questions: Vec<Question>,
    /// Total questions in the store, not just on this page.
    pub total_questions: usize,
    pub categories: Vec<Category>,
    /// Always `None` for the unscoped listing.
    pub current_category: Option<String>,
}

/// Questions of a single category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    /// Total questions in the category, not just on the returned page.
    pub total_questions: usize,
    pub current_category: String,
}

/// Result of a text search over question text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Search is never category-scoped; kept for wire-shape parity.
    pub current_category: Option<String>,
}

/// One quiz draw. `question: None` means the quiz is over — no eligible
/// question remains. A question is never fabricated to fill the field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraw {
    pub question: Option<Question>,
}

/// The service facade over a question store.
pub struct TriviaService {
    store: Arc<dyn QuestionStore>,
    config: ServiceConfig,
}

impl TriviaService {
    pub fn new(store: Arc<dyn QuestionStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// One page of all questions, with the category reference data the
    /// listing UIs need alongside it.
    pub async fn questions(&self, page: usize) -> Result<QuestionList, TriviaError> {
        let all = self.store.list_all().await?;
        let total_questions = all.len();
        let questions = paginate(&all, page, self.config.page_size)?.to_vec();
        let categories = self.store.list_categories().await?;

        Ok(QuestionList {
            questions,
            total_questions,
            categories,
            current_category: None,
        })
    }

    /// Questions of one category, optionally paginated.
    ///
    /// An unknown category id is `CategoryNotFound`. A known category with
    /// no questions is an empty success.
    pub async fn questions_in_category(
        &self,
        category: CategoryId,
        page: Option<usize>,
    ) -> Result<CategoryQuestions, TriviaError> {
        let categories = self.store.list_categories().await?;
        let current_category = categories
            .iter()
            .find(|c| c.id == category)
            .map(|c| c.name.clone())
            .ok_or(TriviaError::CategoryNotFound(category))?;

        let all = self.store.list_by_category(category).await?;
        let total_questions = all.len();
        let questions = match page {
            Some(page) => paginate(&all, page, self.config.page_size)?.to_vec(),
            None => all,
        };

        Ok(CategoryQuestions {
            questions,
            total_questions,
            current_category,
        })
    }

    /// Case-insensitive substring search over question text.
    ///
    /// An empty or whitespace-only term returns an empty result set rather
    /// than the full listing. Zero matches is likewise an empty success,
    /// not an error.
    pub async fn search(&self, term: &str) -> Result<SearchResults, TriviaError> {
        if term.trim().is_empty() {
            return Ok(SearchResults {
                questions: Vec::new(),
                total_questions: 0,
                current_category: None,
            });
        }

        let questions = self.store.search(term).await?;
        let total_questions = questions.len();
        Ok(SearchResults {
            questions,
            total_questions,
            current_category: None,
        })
    }

    /// Validate and persist a new question.
    pub async fn create(&self, new: NewQuestion) -> Result<Question, TriviaError> {
        new.validate()?;
        self.store.create(new).await
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: QuestionId) -> Result<(), TriviaError> {
        self.store.delete(id).await
    }

    /// All categories, ascending by id.
    pub async fn categories(&self) -> Result<Vec<Category>, TriviaError> {
        self.store.list_categories().await
    }

    /// Draw the next quiz question for the caller-supplied session state.
    pub async fn next_question<R: Rng + ?Sized>(
        &self,
        state: &QuizState,
        rng: &mut R,
    ) -> Result<QuizDraw, TriviaError> {
        tracing::debug!(
            category = ?state.category,
            excluded = state.previous_questions.len(),
            "drawing next quiz question"
        );
        let question = quiz::next_question(self.store.as_ref(), state, rng).await?;
        Ok(QuizDraw { question })
    }
}
