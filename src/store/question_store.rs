use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::store::seed::default_questions;
use crate::utils::validation::validate_all;

/// Read-only source of question records.
#[cfg_attr(test, mockall::automock)]
pub trait QuestionProvider: Send + Sync {
    fn all(&self) -> Vec<Question>;
    fn find(&self, id: i32) -> Option<Question>;
}

/// Immutable in-memory question set. Clones share the same records.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Arc<Vec<Question>>,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        validate_all(&questions)?;

        let mut seen = HashSet::new();
        if let Some(dup) = questions.iter().find(|q| !seen.insert(q.id)) {
            return Err(Error::Config(format!("Duplicate question id: {}", dup.id)));
        }

        Ok(Self {
            questions: Arc::new(questions),
        })
    }

    pub fn seeded() -> Self {
        Self {
            questions: Arc::new(default_questions()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let questions: Vec<Question> = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = questions.len(),
            "Loaded questions from file"
        );
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionProvider for QuestionStore {
    fn all(&self) -> Vec<Question> {
        self.questions.as_ref().clone()
    }

    fn find(&self, id: i32) -> Option<Question> {
        self.questions.iter().find(|q| q.id == id).cloned()
    }
}
