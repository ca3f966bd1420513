// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{QuizStore, StoreError};
use crate::models::{
    category::{Category, NewCategory},
    question::{NewQuestion, Question},
};

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category, created_at";

/// Production store backed by a Postgres pool.
///
/// Schema lives in `migrations/`. Each mutation runs in its own transaction,
/// which rolls back on drop if the commit is never reached.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type, created_at FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, type, created_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn insert_category(&self, category: NewCategory) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
            .bind(&category.name)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::Conflict(format!("Category '{}' already exists", category.name))
                } else {
                    StoreError::Database(e)
                }
            })?;

        tx.commit().await?;
        tracing::debug!("Inserted category {}", id);
        Ok(id)
    }

    async fn delete_category(&self, id: i64) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        // Questions go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Category",
                id,
            });
        }

        tx.commit().await?;
        tracing::debug!("Deleted category {}", id);
        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let pattern = format!("%{}%", escape_like(term));

        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.text)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                StoreError::MissingReference {
                    entity: "Category",
                    id: question.category_id,
                }
            } else {
                StoreError::Database(e)
            }
        })?;

        tx.commit().await?;
        tracing::debug!("Inserted question {}", id);
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Question",
                id,
            });
        }

        tx.commit().await?;
        tracing::debug!("Deleted question {}", id);
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}

/// Escapes LIKE wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%_sure\\"), "100\\%\\_sure\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
