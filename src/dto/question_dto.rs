use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{answer::Answer, question::Question};

/// Answer option as shown to players; never carries correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicAnswer {
    pub answer_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: i32,
    pub question_text: String,
    pub answer_options: Vec<PublicAnswer>,
    pub difficulty: i32,
}

impl From<&Answer> for PublicAnswer {
    fn from(answer: &Answer) -> Self {
        Self {
            answer_text: answer.answer_text.clone(),
        }
    }
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question_text: q.question_text.clone(),
            answer_options: q.answer_options.iter().map(PublicAnswer::from).collect(),
            difficulty: q.difficulty,
        }
    }
}

impl From<Question> for PublicQuestion {
    fn from(q: Question) -> Self {
        PublicQuestion::from(&q)
    }
}

/// Raw `?id=` value; parsed by the handler so bad ids get a readable message.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindQuestionQuery {
    pub id: Option<String>,
}

/// Leading integer of a query value, `None` for zero or non-numeric input.
pub fn parse_question_id(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<i32>().ok().filter(|id| *id != 0)
}
