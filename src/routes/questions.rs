use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json},
};

use crate::{
    dto::question_dto::{
        CreateQuestionPayload, PageQuery, QuestionIdResponse, QuestionListResponse,
        SearchPayload, SearchResponse,
    },
    error::{Error, Failure, Result},
    routes::requested_page,
    services::question_service::QuestionMatches,
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 10 questions per page")
    ),
    responses(
        (status = 200, description = "One page of questions with every category", body = Json<QuestionListResponse>),
        (status = 404, description = "Page holds no questions")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let page = requested_page(query);
    let response = async move {
        let questions = state.question_service.list(page).await?;
        let categories = state.category_service.category_map().await?;
        Ok::<_, Error>(QuestionListResponse::new(questions, categories))
    }
    .await
    .map_err(|e| e.respond_as(Failure::NotFound))?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = Json<QuestionIdResponse>),
        (status = 404, description = "Id is not an integer"),
        (status = 422, description = "Question does not exist or could not be deleted")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id.map_err(|e| Error::NotFound(e.body_text()))?;
    let deleted = state
        .question_service
        .delete(id)
        .await
        .map_err(|e| e.respond_as(Failure::Unprocessable))?;
    Ok(Json(QuestionIdResponse::new(deleted)))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created", body = Json<QuestionIdResponse>),
        (status = 422, description = "Missing body, empty question or answer, or insert failed")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateQuestionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let response = async move {
        let Json(payload) = payload.map_err(|e| Error::Unprocessable(e.body_text()))?;
        let question = state.question_service.create(payload).await?;
        Ok::<_, Error>(QuestionIdResponse::new(question.id))
    }
    .await
    .map_err(|e| e.respond_as(Failure::Unprocessable))?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 10 questions per page")
    ),
    request_body = SearchPayload,
    responses(
        (status = 200, description = "Matching questions, possibly none", body = Json<SearchResponse>),
        (status = 404, description = "Body is not JSON or the search failed")
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
    payload: std::result::Result<Json<SearchPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let page = requested_page(query);
    let response = async move {
        let Json(payload) = payload.map_err(|e| Error::NotFound(e.body_text()))?;
        let matches = match payload.term() {
            Some(term) => state.question_service.search(term, page).await?,
            None => QuestionMatches::empty(),
        };
        Ok::<_, Error>(SearchResponse::from(matches))
    }
    .await
    .map_err(|e| e.respond_as(Failure::NotFound))?;
    Ok(Json(response))
}
