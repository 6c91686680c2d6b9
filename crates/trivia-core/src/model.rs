//! Core data model types for trivia.
//!
//! These are the fundamental types the entire trivia system uses to
//! represent questions, categories, and in-flight quiz sessions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TriviaError;

/// Identifier of a question. Ids are positive and assigned by the store.
pub type QuestionId = u64;

/// Identifier of a category. Ids are positive; 0 is never a valid category,
/// which keeps "all categories" representable only as `None`.
pub type CategoryId = u64;

/// Lowest accepted difficulty rating.
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest accepted difficulty rating.
pub const MAX_DIFFICULTY: u8 = 5;

/// A single trivia question.
///
/// Immutable once created — there is no update operation, only
/// delete/create. The `text` field is serialized as `question` to match the
/// established wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, assigned by the store.
    pub id: QuestionId,
    /// The question text shown to the player.
    #[serde(rename = "question")]
    pub text: String,
    /// The accepted answer.
    pub answer: String,
    /// Category this question belongs to.
    pub category: CategoryId,
    /// Difficulty rating in `1..=5`.
    pub difficulty: u8,
}

/// A question category. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display name, serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub name: String,
}

/// A question submitted for creation, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    /// The question text.
    #[serde(rename = "question")]
    pub text: String,
    /// The accepted answer.
    pub answer: String,
    /// Category the question belongs to.
    pub category: CategoryId,
    /// Difficulty rating in `1..=5`.
    pub difficulty: u8,
}

impl NewQuestion {
    /// Check the submission against the creation contract.
    ///
    /// Text and answer must be non-empty after trimming, and the difficulty
    /// must be within `1..=5`. Category existence is the store's foreign-key
    /// concern and is reported as `CategoryNotFound` there, not here.
    pub fn validate(&self) -> Result<(), TriviaError> {
        if self.text.trim().is_empty() {
            return Err(TriviaError::Invalid("question text is empty".into()));
        }
        if self.answer.trim().is_empty() {
            return Err(TriviaError::Invalid("answer is empty".into()));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(TriviaError::Invalid(format!(
                "difficulty {} is outside {}..={}",
                self.difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
            )));
        }
        Ok(())
    }
}

/// The state of one quiz session, supplied in full by the caller on every
/// draw.
///
/// The core is stateless across calls: the caller resends the complete
/// history each turn and appends the drawn id via [`QuizState::record`]
/// before the next call. Nothing here is stored server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizState {
    /// Ids of questions already served in this session.
    #[serde(default)]
    pub previous_questions: HashSet<QuestionId>,
    /// Restrict draws to this category; `None` draws from all categories.
    #[serde(default)]
    pub category: Option<CategoryId>,
}

impl QuizState {
    /// A fresh session drawing from all categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session restricted to one category.
    pub fn in_category(category: CategoryId) -> Self {
        Self {
            previous_questions: HashSet::new(),
            category: Some(category),
        }
    }

    /// Mark a question as served so it is excluded from later draws.
    pub fn record(&mut self, id: QuestionId) {
        self.previous_questions.insert(id);
    }

    /// Whether a question has already been served in this session.
    pub fn was_asked(&self, id: QuestionId) -> bool {
        self.previous_questions.contains(&id)
    }
}
