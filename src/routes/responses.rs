use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::dto::response_dto::{
    PerformanceReport, PerformanceRequest, VerifyResponseRequest, VerifyResponseResponse,
};
use crate::error::{Error, Result};
use crate::models::user_response::UserResponse;
use crate::services::grading_service::GradingService;
use crate::services::performance_service::PerformanceService;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/responses/verify",
    request_body = VerifyResponseRequest,
    responses(
        (status = 200, description = "Whether the answer is correct", body = VerifyResponseResponse),
        (status = 400, description = "Invalid question id or answer")
    )
)]
#[axum::debug_handler]
pub async fn verify_response(
    State(state): State<AppState>,
    payload: std::result::Result<Json<VerifyResponseRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let question_id = req
        .question_id()
        .ok_or_else(|| Error::InvalidInput("Provide a valid question id".to_string()))?;

    let question = state.question_service.get_one_with_secret(question_id)?;
    let is_correct =
        GradingService::verify_response(&question, req.user_answer.as_deref().unwrap_or(""))?;

    tracing::info!(question_id, is_correct, "Response verified");
    Ok(Json(VerifyResponseResponse { is_correct }))
}

#[utoipa::path(
    post,
    path = "/responses/performance",
    request_body = PerformanceRequest,
    responses(
        (status = 200, description = "Aggregated performance report", body = PerformanceReport),
        (status = 400, description = "Unknown question or invalid answer in responses")
    )
)]
#[axum::debug_handler]
pub async fn performance_report(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PerformanceRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    req.validate()?;

    let responses = req
        .responses
        .iter()
        .map(|entry| -> Result<UserResponse> {
            Ok(UserResponse {
                question: state.question_service.get_one_with_secret(entry.question_id)?,
                user_answer: entry.user_answer.clone(),
                date_unix: entry.date_unix,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let performance = PerformanceService::calculate_performance(&responses, req.template())?;
    tracing::info!(
        responses = responses.len(),
        rating = performance.performance_rating,
        "Performance report computed"
    );
    Ok(Json(PerformanceReport::from(performance)))
}
