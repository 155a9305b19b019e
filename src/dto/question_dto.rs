use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::category_dto::CategoryMap;
use crate::models::question::{NewQuestion, Question};
use crate::services::question_service::{CategoryQuestions, QuestionMatches, QuestionPage};
use crate::utils::deserializers::{
    deserialize_optional_difficulty, deserialize_optional_id, deserialize_page,
};

fn first_page() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    pub page: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: first_page() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuestionPayload {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub question: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub answer: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_difficulty")]
    pub difficulty: Option<i32>,
}

impl From<CreateQuestionPayload> for NewQuestion {
    fn from(value: CreateQuestionPayload) -> Self {
        Self {
            question: value.question,
            answer: value.answer,
            category: value.category,
            difficulty: value.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

impl SearchPayload {
    /// The term to match, or `None` when it is missing, null or empty.
    pub fn term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

impl QuestionListResponse {
    pub fn new(page: QuestionPage, categories: CategoryMap) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total,
            categories,
            current_category: page.current_category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<QuestionMatches> for SearchResponse {
    fn from(value: QuestionMatches) -> Self {
        Self {
            success: true,
            questions: value.questions,
            total_questions: value.total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

impl From<CategoryQuestions> for CategoryQuestionsResponse {
    fn from(value: CategoryQuestions) -> Self {
        Self {
            success: true,
            questions: value.matches.questions,
            total_questions: value.matches.total,
            current_category: value.category_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionIdResponse {
    pub success: bool,
    pub question_id: i64,
}

impl QuestionIdResponse {
    pub fn new(question_id: i64) -> Self {
        Self {
            success: true,
            question_id,
        }
    }
}
