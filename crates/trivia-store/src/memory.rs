//! In-memory question store.
//!
//! The reference implementation of [`QuestionStore`]: service and selector
//! tests run against it without touching the filesystem, and [`JsonStore`]
//! builds on it for durability.
//!
//! [`JsonStore`]: crate::json::JsonStore

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use trivia_core::error::TriviaError;
use trivia_core::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use trivia_core::store::QuestionStore;

/// A serializable snapshot of a store's full contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

struct Inner {
    /// Keyed by id; BTreeMap iteration keeps every listing ascending.
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, String>,
    next_id: QuestionId,
}

/// In-memory implementation of [`QuestionStore`].
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// An empty store with no categories or questions.
    pub fn new() -> Self {
        Self::from_data(StoreData::default())
    }

    /// Build a store from a snapshot. Ids present in the snapshot are kept;
    /// newly created questions continue from the highest one.
    pub fn from_data(data: StoreData) -> Self {
        let questions: BTreeMap<QuestionId, Question> =
            data.questions.into_iter().map(|q| (q.id, q)).collect();
        let categories: BTreeMap<CategoryId, String> = data
            .categories
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let next_id = questions.keys().next_back().copied().unwrap_or(0) + 1;

        Self {
            inner: RwLock::new(Inner {
                questions,
                categories,
                next_id,
            }),
        }
    }

    /// A snapshot of the current contents, listings ascending by id.
    pub fn snapshot(&self) -> StoreData {
        let inner = self.inner.read().unwrap();
        StoreData {
            categories: inner
                .categories
                .iter()
                .map(|(&id, name)| Category {
                    id,
                    name: name.clone(),
                })
                .collect(),
            questions: inner.questions.values().cloned().collect(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>, TriviaError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.questions.values().cloned().collect())
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, TriviaError> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        let needle = term.to_lowercase();
        let inner = self.inner.read().unwrap();
        Ok(inner
            .questions
            .values()
            .filter(|q| q.text.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get(&self, id: QuestionId) -> Result<Question, TriviaError> {
        let inner = self.inner.read().unwrap();
        inner
            .questions
            .get(&id)
            .cloned()
            .ok_or(TriviaError::QuestionNotFound(id))
    }

    async fn delete(&self, id: QuestionId) -> Result<(), TriviaError> {
        let mut inner = self.inner.write().unwrap();
        inner
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(TriviaError::QuestionNotFound(id))
    }

    async fn create(&self, new: NewQuestion) -> Result<Question, TriviaError> {
        new.validate()?;

        let mut inner = self.inner.write().unwrap();
        if !inner.categories.contains_key(&new.category) {
            return Err(TriviaError::CategoryNotFound(new.category));
        }

        let id = inner.next_id;
        inner.next_id += 1;
        let question = Question {
            id,
            text: new.text,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        inner.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .categories
            .iter()
            .map(|(&id, name)| Category {
                id,
                name: name.clone(),
            })
            .collect())
    }
}
