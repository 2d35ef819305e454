pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use crate::services::question_service::QuestionService;
use crate::store::QuestionStore;

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
}

impl AppState {
    pub fn new(store: QuestionStore) -> Self {
        let question_service = QuestionService::new(Arc::new(store));

        Self { question_service }
    }
}
