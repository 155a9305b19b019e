pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    extract::rejection::QueryRejection,
    extract::Query,
    http::{Method, Uri},
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{dto::question_dto::PageQuery, error::Error, middleware::cors::trivia_cors, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health).fallback(unknown_route))
        .route(
            "/categories",
            get(categories::list_categories).fallback(unknown_route),
        )
        .route(
            "/categories/:id/questions",
            get(categories::list_category_questions).fallback(unknown_route),
        )
        .route(
            "/questions",
            get(questions::list_questions)
                .post(questions::create_question)
                .fallback(unknown_route),
        )
        .route(
            "/questions/search",
            post(questions::search_questions).fallback(unknown_route),
        )
        .route(
            "/questions/:id",
            delete(questions::delete_question).fallback(unknown_route),
        )
        .route("/quizzes", post(quizzes::play_quiz).fallback(unknown_route))
        .fallback(unknown_route)
        .with_state(state)
        .layer(trivia_cors())
        .layer(TraceLayer::new_for_http())
}

// Serves both unmatched paths and known paths called with the wrong method.
async fn unknown_route(method: Method, uri: Uri) -> Error {
    tracing::info!(%method, %uri, "no route");
    Error::NotFound(format!("No route for {} {}", method, uri))
}

/// Page requested in the query string; 1 when absent or malformed.
pub(crate) fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    query.map(|Query(q)| q).unwrap_or_default().page
}
