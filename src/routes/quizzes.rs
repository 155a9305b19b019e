use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::quiz_dto::{QuizPayload, QuizResponse},
    error::{Error, Failure, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "Next unseen question, or success=false once the pool is exhausted", body = Json<QuizResponse>),
        (status = 400, description = "Missing or unusable quiz_category, or the draw failed")
    )
)]
#[axum::debug_handler]
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let response = async move {
        let Json(payload) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
        let category = payload.category()?;
        let next = state
            .quiz_service
            .next_question(category, payload.previous_questions())
            .await?;
        Ok::<_, Error>(QuizResponse::from(next))
    }
    .await
    .map_err(|e| e.respond_as(Failure::BadRequest))?;
    Ok(Json(response))
}
