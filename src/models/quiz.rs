// src/models/quiz.rs

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;

/// Raw body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategoryRef>,
    pub previous_questions: Option<Vec<Value>>,
}

/// The `quiz_category` object sent by the client. Only `id` is read.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryRef {
    pub id: Option<Value>,
}

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    /// Every question in every category.
    All,
    Category(i64),
}

impl From<i64> for CategorySelector {
    fn from(id: i64) -> Self {
        if id == 0 {
            CategorySelector::All
        } else {
            CategorySelector::Category(id)
        }
    }
}

/// Per-request quiz state supplied by the client. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub category: CategorySelector,
    pub previous_questions: BTreeSet<i64>,
}
