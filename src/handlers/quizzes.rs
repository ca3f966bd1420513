// src/handlers/quizzes.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    extract::AppJson,
    models::quiz::QuizRequest,
    services::quiz,
    state::{SharedRandom, SharedStore},
    validation,
};

/// Serves the next question of a quiz round.
///
/// * 400 if the body is malformed or `previous_questions` strays outside the round.
/// * 404 if `quiz_category.id` names an unknown category (0 means all categories).
/// * `question: null` once every question in the round has been served.
pub async fn next_question(
    State(store): State<SharedStore>,
    State(random): State<SharedRandom>,
    AppJson(request): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let round = validation::quiz_round(request)?;

    let question = quiz::next_question(store.as_ref(), random.as_ref(), &round).await?;

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
