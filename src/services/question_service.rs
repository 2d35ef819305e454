use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::dto::question_dto::PublicQuestion;
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::store::QuestionProvider;

#[derive(Clone)]
pub struct QuestionService {
    provider: Arc<dyn QuestionProvider>,
}

impl QuestionService {
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self { provider }
    }

    pub fn get_one(&self, id: i32) -> Result<PublicQuestion> {
        self.get_one_with_secret(id).map(PublicQuestion::from)
    }

    /// Full record including correctness flags. Never hand this to clients.
    pub fn get_one_with_secret(&self, id: i32) -> Result<Question> {
        self.provider
            .find(id)
            .ok_or_else(|| Error::NotFound("Question not found".to_string()))
    }

    pub fn get_random(&self) -> Result<PublicQuestion> {
        let questions = self.provider.all();
        questions
            .choose(&mut rand::thread_rng())
            .map(PublicQuestion::from)
            .ok_or_else(|| Error::NotFound("No questions available".to_string()))
    }

    pub fn get_many(&self) -> Vec<PublicQuestion> {
        self.provider.all().iter().map(PublicQuestion::from).collect()
    }

    pub fn count(&self) -> usize {
        self.provider.all().len()
    }
}
