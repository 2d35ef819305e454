use serde::{Deserialize, Serialize};

use crate::models::user_response::UserResponse;

const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyResponse {
    /// Two-digit calendar month, `"01"`..`"12"`.
    pub month: String,
    pub name: String,
    #[serde(default)]
    pub responses: Vec<UserResponse>,
    #[serde(default)]
    pub performance: f64,
}

impl MonthlyResponse {
    pub fn empty(month: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            name: name.into(),
            responses: Vec::new(),
            performance: 0.0,
        }
    }

    /// Twelve empty buckets in calendar order. Built fresh on every call.
    pub fn default_template() -> Vec<MonthlyResponse> {
        MONTHS
            .iter()
            .map(|(month, name)| MonthlyResponse::empty(*month, *name))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformance {
    pub performance_rating: f64,
    pub overall_average_performance_q4: f64,
    pub aggregated_performance_by_month: Vec<MonthlyResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_has_twelve_ordered_months() {
        let template = MonthlyResponse::default_template();
        assert_eq!(template.len(), 12);
        for (idx, bucket) in template.iter().enumerate() {
            assert_eq!(bucket.month, format!("{:02}", idx + 1));
            assert!(bucket.responses.is_empty());
            assert_eq!(bucket.performance, 0.0);
        }
        assert_eq!(template[7].name, "August");
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let report = UserPerformance {
            performance_rating: 50.0,
            overall_average_performance_q4: 44.44,
            aggregated_performance_by_month: vec![],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["performanceRating"], 50.0);
        assert_eq!(value["overallAveragePerformanceQ4"], 44.44);
        assert!(value["aggregatedPerformanceByMonth"].is_array());
    }
}
