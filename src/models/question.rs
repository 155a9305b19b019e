use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A trivia question as stored and as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}

/// Fields supplied on insert; the id is assigned by the datastore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}
