pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::TriviaStore;
use crate::services::{
    category_service::CategoryService, question_service::QuestionService,
    quiz_service::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
    pub category_service: CategoryService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        let question_service = QuestionService::new(store.clone());
        let category_service = CategoryService::new(store.clone());
        let quiz_service = QuizService::new(store);

        Self {
            question_service,
            category_service,
            quiz_service,
        }
    }
}
