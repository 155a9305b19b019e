use std::sync::Arc;

use crate::database::TriviaStore;
use crate::dto::question_dto::CreateQuestionPayload;
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::utils::{pagination::paginate, validation::validate};

#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

/// One page of the full question list.
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: usize,
    /// Category of the last question on the page.
    pub current_category: Option<i64>,
}

/// One page of a filtered question set, with the unpaginated match count.
pub struct QuestionMatches {
    pub questions: Vec<Question>,
    pub total: usize,
}

pub struct CategoryQuestions {
    pub category_id: i64,
    pub matches: QuestionMatches,
}

impl QuestionMatches {
    fn paged(all: Vec<Question>, page: i64) -> Self {
        Self {
            questions: paginate(&all, page).to_vec(),
            total: all.len(),
        }
    }

    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
            total: 0,
        }
    }
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Fails with `NotFound` when the page holds no questions.
    pub async fn list(&self, page: i64) -> Result<QuestionPage> {
        let all = self.store.all_questions().await?;
        let questions = paginate(&all, page).to_vec();
        if questions.is_empty() {
            return Err(Error::NotFound(format!("No questions on page {}", page)));
        }

        Ok(QuestionPage {
            current_category: questions.last().and_then(|q| q.category),
            questions,
            total: all.len(),
        })
    }

    pub async fn search(&self, term: &str, page: i64) -> Result<QuestionMatches> {
        let all = self.store.search_questions(term).await?;
        tracing::debug!(term, matches = all.len(), "question search");
        Ok(QuestionMatches::paged(all, page))
    }

    pub async fn by_category(&self, category_id: i64, page: i64) -> Result<CategoryQuestions> {
        let all = self.store.questions_in_category(category_id).await?;
        Ok(CategoryQuestions {
            category_id,
            matches: QuestionMatches::paged(all, page),
        })
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        validate(&payload)?;
        let question = self.store.insert_question(payload.into()).await?;
        tracing::info!(question_id = question.id, "question created");
        Ok(question)
    }

    /// Returns the id of the removed question.
    pub async fn delete(&self, id: i64) -> Result<i64> {
        if self.store.find_question(id).await?.is_none() {
            return Err(Error::NotFound(format!("Question {} not found", id)));
        }
        if self.store.delete_question(id).await? == 0 {
            return Err(Error::NotFound(format!("Question {} was already removed", id)));
        }
        tracing::info!(question_id = id, "question deleted");
        Ok(id)
    }
}
