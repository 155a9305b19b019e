use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::utils::deserializers::{deserialize_id_list, id_from_value};

/// Category id the client sends to play across every category.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuizPayload {
    #[serde(default, deserialize_with = "deserialize_id_list")]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<JsonValue>,
}

impl QuizPayload {
    pub fn previous_questions(&self) -> &[i64] {
        &self.previous_questions
    }

    pub fn category(&self) -> Result<QuizCategory> {
        QuizCategory::parse(self.quiz_category.as_ref())
    }
}

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(i64),
}

impl QuizCategory {
    /// Reads the `quiz_category` body field: an object whose `id` is the
    /// category, with `0` meaning every category.
    pub fn parse(value: Option<&JsonValue>) -> Result<Self> {
        let value = match value {
            Some(v) if !is_falsy(v) => v,
            _ => return Err(Error::BadRequest("quiz_category is required".to_string())),
        };
        let id = value
            .as_object()
            .and_then(|obj| obj.get("id"))
            .and_then(id_from_value)
            .ok_or_else(|| Error::BadRequest(format!("Invalid quiz_category {value}")))?;

        Ok(if id == ALL_CATEGORIES {
            QuizCategory::All
        } else {
            QuizCategory::Category(id)
        })
    }
}

fn is_falsy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Next { success: bool, question: Question },
    Exhausted { success: bool, questions: Vec<Question> },
}

impl From<Option<Question>> for QuizResponse {
    fn from(value: Option<Question>) -> Self {
        match value {
            Some(question) => QuizResponse::Next {
                success: true,
                question,
            },
            None => QuizResponse::Exhausted {
                success: false,
                questions: Vec::new(),
            },
        }
    }
}
