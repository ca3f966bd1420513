// src/handlers/categories.rs

use std::collections::BTreeMap;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    models::category::{Category, CreateCategoryRequest},
    state::SharedStore,
    validation,
};

/// Category id to name, the shape the web client renders its sidebar from.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.name)).collect()
}

/// Lists all categories.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await?;
    let total = categories.len();

    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
        "total_categories": total,
    })))
}

/// Creates a new category. Names are unique ignoring case.
pub async fn create_category(
    State(store): State<SharedStore>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = validation::new_category(payload)?;

    let id = store.insert_category(category).await?;
    tracing::info!("Created category {}", id);

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "category_id": id})),
    ))
}

/// Deletes a category and every question in it.
pub async fn delete_category(
    State(store): State<SharedStore>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    store.delete_category(id).await?;
    tracing::info!("Deleted category {}", id);

    Ok(Json(json!({"success": true, "deleted": id})))
}

/// Lists every question of one category, unpaginated.
pub async fn questions_by_category(
    State(store): State<SharedStore>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let category = store
        .get_category(id)
        .await?
        .ok_or(AppError::NotFound("Category not found".to_string()))?;

    let questions = store.questions_in_category(category.id).await?;

    Ok(Json(json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": category.name,
    })))
}
