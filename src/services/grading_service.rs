use crate::error::{Error, Result};
use crate::models::question::Question;

pub struct GradingService;

impl GradingService {
    /// Checks `user_answer` against the question's options by exact,
    /// case-sensitive text match and returns that option's correctness.
    pub fn verify_response(question: &Question, user_answer: &str) -> Result<bool> {
        if user_answer.is_empty() {
            return Err(Error::InvalidInput("Provide an answer!".to_string()));
        }

        let answer = question
            .option(user_answer)
            .ok_or_else(|| Error::InvalidInput("Oops! that's not a valid option".to_string()))?;

        tracing::debug!(
            question_id = question.id,
            is_correct = answer.is_correct,
            "Verified response"
        );
        Ok(answer.is_correct)
    }
}
