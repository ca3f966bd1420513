// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display name of the category.
    /// Stored in the `type` column, which is also the key the web client reads.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub name: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub category: String,
}

/// A category ready to be handed to the store.
/// Validated after sanitizing, since escaping can lengthen the name.
#[derive(Debug, Clone, Validate)]
pub struct NewCategory {
    #[validate(custom(function = validate_category_name))]
    pub name: String,
}

fn validate_category_name(name: &str) -> Result<(), validator::ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(validator::ValidationError::new("category_cannot_be_empty"));
    }
    if trimmed.chars().count() > 100 {
        return Err(validator::ValidationError::new("category_too_long"));
    }
    Ok(())
}
