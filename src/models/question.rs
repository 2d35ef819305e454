use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::answer::Answer;

pub const MAX_DIFFICULTY: i32 = 4;

/// A quiz item as held by the store, including which option is correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1))]
    pub question_text: String,
    #[validate(length(min = 1))]
    pub answer_options: Vec<Answer>,
    /// Weight of a correct answer; an incorrect one costs `5 - difficulty`.
    #[validate(range(min = 1, max = 4))]
    pub difficulty: i32,
}

impl Question {
    pub fn option(&self, answer_text: &str) -> Option<&Answer> {
        self.answer_options
            .iter()
            .find(|a| a.answer_text == answer_text)
    }

    pub fn penalty(&self) -> i32 {
        MAX_DIFFICULTY + 1 - self.difficulty
    }
}
