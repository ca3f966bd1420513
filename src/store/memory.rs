// src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{QuizStore, StoreError};
use crate::models::{
    category::{Category, NewCategory},
    question::{NewQuestion, Question},
};

/// In-process store with the same semantics as `PgStore`.
///
/// Ids are assigned from per-table counters and never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_category_id: i64,
    last_question_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn insert_category(&self, category: NewCategory) -> Result<i64, StoreError> {
        let mut tables = self.inner.write().await;

        let wanted = category.name.to_lowercase();
        if tables
            .categories
            .values()
            .any(|c| c.name.to_lowercase() == wanted)
        {
            return Err(StoreError::Conflict(format!(
                "Category '{}' already exists",
                category.name
            )));
        }

        tables.last_category_id += 1;
        let id = tables.last_category_id;
        tables.categories.insert(
            id,
            Category {
                id,
                name: category.name,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn delete_category(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;

        if tables.categories.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                entity: "Category",
                id,
            });
        }
        tables.questions.retain(|_, q| q.category_id != id);
        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let tables = self.inner.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.text.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i64, StoreError> {
        let mut tables = self.inner.write().await;

        if !tables.categories.contains_key(&question.category_id) {
            return Err(StoreError::MissingReference {
                entity: "Category",
                id: question.category_id,
            });
        }

        tables.last_question_id += 1;
        let id = tables.last_question_id;
        tables.questions.insert(
            id,
            Question {
                id,
                text: question.text,
                answer: question.answer,
                difficulty: question.difficulty,
                category_id: question.category_id,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;

        match tables.questions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                entity: "Question",
                id,
            }),
        }
    }
}
