// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question, stored in the `question` column.
    #[sqlx(rename = "question")]
    #[serde(rename = "question")]
    pub text: String,

    pub answer: String,

    pub difficulty: i32,

    /// Owning category id, stored in the `category` column.
    #[sqlx(rename = "category")]
    #[serde(rename = "category")]
    pub category_id: i64,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Raw body of `POST /questions` when it creates a question.
///
/// Numeric fields are kept as raw JSON so that numeric strings can be
/// coerced and anything else reported as a 400.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<Value>,
    pub category: Option<Value>,
}

/// Body of `POST /questions` when it searches.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub search_term: String,
}

/// A validated question, ready to be handed to the store.
#[derive(Debug, Clone, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
    #[validate(range(min = 1))]
    pub difficulty: i32,
    pub category_id: i64,
}
