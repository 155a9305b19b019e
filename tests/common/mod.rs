#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use trivia_api::{
    database::TriviaStore,
    error::{Error, Result},
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    routes, AppState,
};

#[derive(Default)]
struct Tables {
    questions: Vec<Question>,
    categories: Vec<Category>,
    next_id: i64,
    broken: bool,
}

/// `TriviaStore` over in-memory tables, shared with the test body.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn with_categories(labels: &[(i64, &str)]) -> Self {
        let store = Self::default();
        {
            let mut t = store.tables.lock().unwrap();
            t.categories = labels
                .iter()
                .map(|(id, label)| Category {
                    id: *id,
                    category_type: label.to_string(),
                })
                .collect();
            t.next_id = 1;
        }
        store
    }

    pub fn add(&self, question: &str, answer: &str, category: Option<i64>) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id;
        t.next_id += 1;
        t.questions.push(Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty: Some(1),
        });
        id
    }

    pub fn question_count(&self) -> usize {
        self.tables.lock().unwrap().questions.len()
    }

    pub fn get(&self, id: i64) -> Option<Question> {
        let t = self.tables.lock().unwrap();
        t.questions.iter().find(|q| q.id == id).cloned()
    }

    /// Every later call fails as if the database were unreachable.
    pub fn break_connection(&self) {
        self.tables.lock().unwrap().broken = true;
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T> {
        let t = self.tables.lock().unwrap();
        if t.broken {
            return Err(Error::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(f(&t))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T> {
        let mut t = self.tables.lock().unwrap();
        if t.broken {
            return Err(Error::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(f(&mut t))
    }
}

fn sorted(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|q| q.id);
    questions
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn all_questions(&self) -> Result<Vec<Question>> {
        self.read(|t| sorted(t.questions.clone()))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        self.read(|t| {
            sorted(
                t.questions
                    .iter()
                    .filter(|q| q.question.to_lowercase().contains(&needle))
                    .cloned()
                    .collect(),
            )
        })
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
        self.read(|t| {
            sorted(
                t.questions
                    .iter()
                    .filter(|q| q.category == Some(category_id))
                    .cloned()
                    .collect(),
            )
        })
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>> {
        self.read(|t| t.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        self.write(|t| {
            let row = Question {
                id: t.next_id,
                question: question.question,
                answer: question.answer,
                category: question.category,
                difficulty: question.difficulty,
            };
            t.next_id += 1;
            t.questions.push(row.clone());
            row
        })
    }

    async fn delete_question(&self, id: i64) -> Result<u64> {
        self.write(|t| {
            let before = t.questions.len();
            t.questions.retain(|q| q.id != id);
            (before - t.questions.len()) as u64
        })
    }

    async fn all_categories(&self) -> Result<Vec<Category>> {
        self.read(|t| {
            let mut categories = t.categories.clone();
            categories.sort_by_key(|c| c.id);
            categories
        })
    }
}

pub fn standard_categories() -> MemoryStore {
    MemoryStore::with_categories(&[
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ])
}

pub fn app(store: &MemoryStore) -> Router {
    routes::router(AppState::new(Arc::new(store.clone())))
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub fn assert_failure(status: StatusCode, body: &JsonValue, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16().to_string());
    assert_eq!(body["message"], message);
}
