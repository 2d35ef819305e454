use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::question_dto::{parse_question_id, PublicQuestion};
use crate::models::performance::{MonthlyResponse, UserPerformance};
use crate::models::user_response::UserResponse;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponseRequest {
    /// Number or numeric string.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub question_id: Option<JsonValue>,
    #[serde(default)]
    pub user_answer: Option<String>,
}

impl VerifyResponseRequest {
    pub fn question_id(&self) -> Option<i32> {
        match self.question_id.as_ref()? {
            JsonValue::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .filter(|id| *id != 0),
            JsonValue::String(s) => parse_question_id(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponseResponse {
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEntry {
    #[validate(range(min = 1))]
    pub question_id: i32,
    pub user_answer: String,
    pub date_unix: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthTemplateEntry {
    pub month: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRequest {
    #[validate(nested)]
    pub responses: Vec<ResponseEntry>,
    #[serde(default)]
    pub template: Option<Vec<MonthTemplateEntry>>,
}

impl PerformanceRequest {
    pub fn template(&self) -> Option<Vec<MonthlyResponse>> {
        self.template.as_ref().map(|entries| {
            entries
                .iter()
                .map(|e| MonthlyResponse::empty(e.month.clone(), e.name.clone()))
                .collect()
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserResponse {
    pub question: PublicQuestion,
    pub user_answer: String,
    pub date_unix: i64,
}

impl From<&UserResponse> for PublicUserResponse {
    fn from(r: &UserResponse) -> Self {
        Self {
            question: PublicQuestion::from(&r.question),
            user_answer: r.user_answer.clone(),
            date_unix: r.date_unix,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    pub month: String,
    pub name: String,
    pub responses: Vec<PublicUserResponse>,
    pub performance: f64,
}

impl From<MonthlyResponse> for MonthlyPerformance {
    fn from(bucket: MonthlyResponse) -> Self {
        Self {
            responses: bucket.responses.iter().map(PublicUserResponse::from).collect(),
            month: bucket.month,
            name: bucket.name,
            performance: bucket.performance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub performance_rating: f64,
    pub overall_average_performance_q4: f64,
    pub aggregated_performance_by_month: Vec<MonthlyPerformance>,
}

impl From<UserPerformance> for PerformanceReport {
    fn from(p: UserPerformance) -> Self {
        Self {
            performance_rating: p.performance_rating,
            overall_average_performance_q4: p.overall_average_performance_q4,
            aggregated_performance_by_month: p
                .aggregated_performance_by_month
                .into_iter()
                .map(MonthlyPerformance::from)
                .collect(),
        }
    }
}
