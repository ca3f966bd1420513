// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{categories, questions, quizzes},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Category, question and quiz routes at the root, as the web client expects.
/// * Unknown paths answer with the 404 envelope.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/{id}", delete(categories::delete_category))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::post_questions),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_question))
        .fallback(not_found)
        // Global Middleware (applied from top to bottom)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Builds the CORS policy. An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
