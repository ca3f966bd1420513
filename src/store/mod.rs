// src/store/mod.rs

//! Question/category repository.
//!
//! Handlers and the quiz selector only see the `QuizStore` trait; the
//! concrete backend is chosen at startup and injected through `AppState`.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    category::{Category, NewCategory},
    question::{NewQuestion, Question},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A record being written points at a record that does not exist.
    #[error("referenced {entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i64 },

    /// A uniqueness rule rejected the write.
    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Repository over categories and questions.
///
/// All listings are ordered by ascending id. Mutations are all-or-nothing.
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    /// Inserts a category and returns its new id.
    /// Names are unique ignoring case.
    async fn insert_category(&self, category: NewCategory) -> Result<i64, StoreError>;

    /// Deletes a category together with its questions.
    async fn delete_category(&self, id: i64) -> Result<(), StoreError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StoreError>;

    /// Inserts a question and returns its new id.
    /// Fails with `MissingReference` if the category does not exist.
    async fn insert_question(&self, question: NewQuestion) -> Result<i64, StoreError>;

    async fn delete_question(&self, id: i64) -> Result<(), StoreError>;
}
