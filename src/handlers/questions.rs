// src/handlers/questions.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::AppError,
    extract::{AppJson, AppPath, AppQuery},
    handlers::categories::category_map,
    models::question::{CreateQuestionRequest, SearchRequest},
    state::SharedStore,
    utils::{
        html::clean_search_term,
        pagination::{QUESTIONS_PER_PAGE, paginate},
    },
    validation,
};

/// Query parameters for listing questions.
/// `page` is kept as text so that junk falls back to page 1 instead of failing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// Lists questions ordered by id, one page at a time.
///
/// A page past the end (or below 1) is served as page 1; `actual_page`
/// reports the page that was returned.
pub async fn list_questions(
    State(store): State<SharedStore>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let requested = validation::page_number(params.page.as_deref());

    let questions = store.list_questions().await?;
    let categories = store.list_categories().await?;

    let page = paginate(questions, requested, QUESTIONS_PER_PAGE);
    if page.served_page != requested {
        tracing::debug!("Page {} out of range, serving page 1", requested);
    }

    Ok(Json(json!({
        "success": true,
        "questions": page.items,
        "total_questions": page.total_count,
        "total_pages": page.total_pages,
        "actual_page": page.served_page,
        "categories": category_map(categories),
        "current_category": "",
    })))
}

/// `POST /questions` either searches or creates, depending on whether the
/// body carries a `search_term`.
pub async fn post_questions(
    State(store): State<SharedStore>,
    AppJson(body): AppJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let Value::Object(fields) = &body else {
        return Err(AppError::BadRequest("Request body must be a JSON object".to_string()));
    };

    if fields.contains_key("search_term") {
        let request: SearchRequest = serde_json::from_value(body)?;
        search_questions(&store, request).await.map(IntoResponse::into_response)
    } else {
        let request: CreateQuestionRequest = serde_json::from_value(body)?;
        create_question(&store, request).await.map(IntoResponse::into_response)
    }
}

/// Case-insensitive substring search over question text. Not paginated.
async fn search_questions(
    store: &SharedStore,
    request: SearchRequest,
) -> Result<impl IntoResponse, AppError> {
    // Stored text is escaped, so the term must be too.
    let term = clean_search_term(&request.search_term);
    let questions = store.search_questions(&term).await?;

    Ok(Json(json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": "",
    })))
}

/// Creates a new question in an existing category.
async fn create_question(
    store: &SharedStore,
    request: CreateQuestionRequest,
) -> Result<impl IntoResponse, AppError> {
    let question = validation::new_question(request)?;

    if store.get_category(question.category_id).await?.is_none() {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    let id = store.insert_question(question).await?;
    tracing::info!("Created question {}", id);

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "question_id": id})),
    ))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(store): State<SharedStore>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    store.delete_question(id).await?;
    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({"success": true, "deleted": id})))
}
