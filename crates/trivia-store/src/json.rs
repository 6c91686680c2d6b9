//! JSON-file question store.
//!
//! Wraps [`MemoryStore`] with durability: the whole data set is loaded from
//! a JSON document at open and the document is rewritten after every
//! successful mutation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use trivia_core::error::TriviaError;
use trivia_core::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use trivia_core::store::QuestionStore;

use crate::memory::{MemoryStore, StoreData};

/// File-backed implementation of [`QuestionStore`].
pub struct JsonStore {
    path: PathBuf,
    mem: MemoryStore,
}

impl JsonStore {
    /// Open an existing data file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read data file: {}", path.display()))?;
        let data: StoreData = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse data file: {}", path.display()))?;
        tracing::debug!(
            questions = data.questions.len(),
            categories = data.categories.len(),
            "loaded {}",
            path.display()
        );

        Ok(Self {
            path,
            mem: MemoryStore::from_data(data),
        })
    }

    /// Write an initial data file. Refuses to overwrite an existing one.
    pub fn init(path: &Path, data: &StoreData) -> Result<()> {
        anyhow::ensure!(
            !path.exists(),
            "data file already exists: {}",
            path.display()
        );
        write_data(path, data)
    }

    fn persist(&self) -> Result<(), TriviaError> {
        write_data(&self.path, &self.mem.snapshot())?;
        Ok(())
    }
}

fn write_data(path: &Path, data: &StoreData) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("failed to serialize store data")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write data file: {}", path.display()))?;
    Ok(())
}

#[async_trait]
impl QuestionStore for JsonStore {
    async fn list_all(&self) -> Result<Vec<Question>, TriviaError> {
        self.mem.list_all().await
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, TriviaError> {
        self.mem.list_by_category(category).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        self.mem.search(term).await
    }

    async fn get(&self, id: QuestionId) -> Result<Question, TriviaError> {
        self.mem.get(id).await
    }

    async fn delete(&self, id: QuestionId) -> Result<(), TriviaError> {
        self.mem.delete(id).await?;
        self.persist()
    }

    async fn create(&self, new: NewQuestion) -> Result<Question, TriviaError> {
        let question = self.mem.create(new).await?;
        self.persist()?;
        Ok(question)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        self.mem.list_categories().await
    }
}
