use axum::Json;
use utoipa::OpenApi;

use crate::dto::question_dto::{PublicAnswer, PublicQuestion};
use crate::dto::response_dto::{
    MonthTemplateEntry, MonthlyPerformance, PerformanceReport, PerformanceRequest,
    PublicUserResponse, ResponseEntry, VerifyResponseRequest, VerifyResponseResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::questions::find_question,
        crate::routes::questions::random_question,
        crate::routes::questions::all_questions,
        crate::routes::responses::verify_response,
        crate::routes::responses::performance_report,
    ),
    components(schemas(
        PublicQuestion,
        PublicAnswer,
        VerifyResponseRequest,
        VerifyResponseResponse,
        PerformanceRequest,
        ResponseEntry,
        MonthTemplateEntry,
        PerformanceReport,
        MonthlyPerformance,
        PublicUserResponse,
    )),
    tags((name = "quiz", description = "Quiz questions and response scoring"))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
