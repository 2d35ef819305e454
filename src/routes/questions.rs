use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::dto::question_dto::{parse_question_id, FindQuestionQuery, PublicQuestion};
use crate::error::{Error, Result};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/questions/find",
    params(FindQuestionQuery),
    responses(
        (status = 200, description = "Question found", body = PublicQuestion),
        (status = 400, description = "Missing, invalid or unknown question id")
    )
)]
#[axum::debug_handler]
pub async fn find_question(
    State(state): State<AppState>,
    Query(query): Query<FindQuestionQuery>,
) -> Result<impl IntoResponse> {
    let id = query
        .id
        .as_deref()
        .and_then(parse_question_id)
        .ok_or_else(|| Error::InvalidInput("Provide a valid question id as query".to_string()))?;

    let question = state.question_service.get_one(id)?;
    Ok(Json(question))
}

#[utoipa::path(
    get,
    path = "/questions/random",
    responses(
        (status = 200, description = "A random question", body = PublicQuestion),
        (status = 400, description = "No questions loaded")
    )
)]
#[axum::debug_handler]
pub async fn random_question(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let question = state.question_service.get_random()?;
    Ok(Json(question))
}

#[utoipa::path(
    get,
    path = "/questions/all",
    responses(
        (status = 200, description = "Every question", body = [PublicQuestion])
    )
)]
#[axum::debug_handler]
pub async fn all_questions(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.question_service.get_many())
}
