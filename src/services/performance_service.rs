use std::collections::HashSet;

use crate::error::Result;
use crate::models::performance::{MonthlyResponse, UserPerformance};
use crate::models::user_response::UserResponse;
use crate::services::grading_service::GradingService;
use crate::utils::time::{month_number, month_of, parse_month};

const Q4_START_MONTH: &str = "10";

/// Stateless aggregation of dated responses into a performance report.
pub struct PerformanceService;

impl PerformanceService {
    pub fn calculate_performance(
        responses: &[UserResponse],
        template: Option<Vec<MonthlyResponse>>,
    ) -> Result<UserPerformance> {
        let template = template.unwrap_or_else(MonthlyResponse::default_template);

        let report = UserPerformance {
            performance_rating: Self::compute_average_performance(responses)?,
            overall_average_performance_q4: Self::get_performance_by_quarter(
                responses,
                Q4_START_MONTH,
                None,
            )?,
            aggregated_performance_by_month: Self::get_performance_by_month(responses, template)?,
        };

        tracing::debug!(
            responses = responses.len(),
            rating = report.performance_rating,
            q4 = report.overall_average_performance_q4,
            "Calculated performance"
        );
        Ok(report)
    }

    /// Weighted accuracy in `[0, 100]`, rounded to two decimals.
    ///
    /// A correct answer adds the question's difficulty, an incorrect one
    /// subtracts `5 - difficulty`; the sum is scaled by the total difficulty.
    /// An empty input scores `0`.
    pub fn compute_average_performance<'a, I>(responses: I) -> Result<f64>
    where
        I: IntoIterator<Item = &'a UserResponse>,
    {
        let mut score: i64 = 0;
        let mut difficulty_total: i64 = 0;

        for response in responses {
            let question = &response.question;
            let is_correct = GradingService::verify_response(question, &response.user_answer)?;

            difficulty_total += i64::from(question.difficulty);
            if is_correct {
                score += i64::from(question.difficulty);
            } else {
                score -= i64::from(question.penalty());
            }
        }

        if difficulty_total == 0 {
            return Ok(0.0);
        }

        let rating = round2(score as f64 * 100.0 / difficulty_total as f64);
        Ok(if rating > 0.0 { rating } else { 0.0 })
    }

    /// Distributes responses into the template's buckets by UTC month and
    /// scores each bucket on its own.
    ///
    /// Bucket order and count follow the template; a repeated bucket name keeps
    /// only its first occurrence. Responses whose month has no bucket are dropped.
    pub fn get_performance_by_month(
        responses: &[UserResponse],
        template: Vec<MonthlyResponse>,
    ) -> Result<Vec<MonthlyResponse>> {
        let mut seen = HashSet::new();
        let mut buckets: Vec<MonthlyResponse> = template
            .into_iter()
            .filter(|bucket| seen.insert(bucket.name.clone()))
            .collect();

        for response in responses {
            let Some(month) = month_of(response.date_unix) else {
                continue;
            };
            match bucket_index(&buckets, &month) {
                Some(idx) => buckets[idx].responses.push(response.clone()),
                None => tracing::trace!(month = %month, "No bucket for month, response dropped"),
            }
        }

        for bucket in buckets.iter_mut() {
            bucket.performance = Self::compute_average_performance(&bucket.responses)?;
        }

        Ok(buckets)
    }

    /// Score over responses whose month lies in `[start_month, end_month]`,
    /// or from `start_month` onward when no end is given.
    pub fn get_performance_by_quarter(
        responses: &[UserResponse],
        start_month: &str,
        end_month: Option<&str>,
    ) -> Result<f64> {
        let in_range = Self::responses_in_month_range(responses, start_month, end_month)?;
        Self::compute_average_performance(in_range)
    }

    pub fn responses_in_month_range<'a>(
        responses: &'a [UserResponse],
        start_month: &str,
        end_month: Option<&str>,
    ) -> Result<Vec<&'a UserResponse>> {
        let start = parse_month(start_month)?;
        let end = end_month
            .filter(|m| !m.is_empty())
            .map(parse_month)
            .transpose()?;

        Ok(responses
            .iter()
            .filter(|r| match month_number(r.date_unix) {
                Some(month) => month >= start && end.map_or(true, |end| month <= end),
                None => false,
            })
            .collect())
    }

    pub fn select_bucket<'a>(
        buckets: &'a [MonthlyResponse],
        month: &str,
    ) -> Option<&'a MonthlyResponse> {
        bucket_index(buckets, month).map(|idx| &buckets[idx])
    }
}

fn bucket_index(buckets: &[MonthlyResponse], month: &str) -> Option<usize> {
    buckets.iter().position(|bucket| bucket.month == month)
}

/// Two decimals, halves rounded away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
