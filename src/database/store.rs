use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Row-level access to the `questions` and `categories` tables.
///
/// Every listing is ordered by ascending id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn all_questions(&self) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>>;

    async fn find_question(&self, id: i64) -> Result<Option<Question>>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Returns the number of rows removed.
    async fn delete_question(&self, id: i64) -> Result<u64>;

    async fn all_categories(&self) -> Result<Vec<Category>>;
}
