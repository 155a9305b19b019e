use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        category_dto::CategoriesResponse,
        question_dto::{CategoryQuestionsResponse, PageQuery},
    },
    error::{Error, Failure, Result},
    routes::requested_page,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Every category label keyed by id", body = Json<CategoriesResponse>),
        (status = 422, description = "Categories could not be read")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state
        .category_service
        .category_map()
        .await
        .map_err(|e| e.respond_as(Failure::Unprocessable))?;
    Ok(Json(CategoriesResponse::from(categories)))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category ID"),
        ("page" = Option<i64>, Query, description = "Page number, 10 questions per page")
    ),
    responses(
        (status = 200, description = "Questions in the category, possibly none", body = Json<CategoryQuestionsResponse>),
        (status = 404, description = "Id is not an integer or the lookup failed")
    )
)]
#[axum::debug_handler]
pub async fn list_category_questions(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Path(category_id) = id.map_err(|e| Error::NotFound(e.body_text()))?;
    let page = requested_page(query);
    let questions = state
        .question_service
        .by_category(category_id, page)
        .await
        .map_err(|e| e.respond_as(Failure::NotFound))?;
    Ok(Json(CategoryQuestionsResponse::from(questions)))
}
