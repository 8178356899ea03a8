//! Request DTOs for the trivia API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::store::NewQuestion;

/// Fields every new question must carry.
pub const REQUIRED_QUESTION_FIELDS: [&str; 4] = ["question", "answer", "category", "difficulty"];

/// Request body for question creation (POST /questions)
///
/// Kept as the raw JSON object so the submitted mapping can be echoed back.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CreateQuestionRequest {
    pub fields: Map<String, Value>,
}

impl CreateQuestionRequest {
    /// Validates the request and converts it into an insert payload.
    ///
    /// Every required field must be present and every submitted value must be
    /// truthy: no empty strings, zeros, nulls, `false` or empty collections.
    pub fn validate(&self) -> Result<NewQuestion, String> {
        for name in REQUIRED_QUESTION_FIELDS {
            if !self.fields.contains_key(name) {
                return Err(format!("missing field '{}'", name));
            }
        }
        if let Some((name, _)) = self.fields.iter().find(|(_, value)| !is_truthy(value)) {
            return Err(format!("field '{}' is empty", name));
        }

        Ok(NewQuestion {
            question: self.text_field("question")?,
            answer: self.text_field("answer")?,
            category: self.integer_field("category")?,
            difficulty: self.integer_field("difficulty")?,
        })
    }

    fn text_field(&self, name: &str) -> Result<String, String> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| format!("field '{}' must be a string", name))
    }

    fn integer_field(&self, name: &str) -> Result<i64, String> {
        self.fields
            .get(name)
            .and_then(as_integer)
            .ok_or_else(|| format!("field '{}' must be an integer", name))
    }
}

/// Request body for question search (POST /questions/search)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Category selector inside a quiz request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    /// Category id, `0` for all categories. Numbers and numeric strings are accepted.
    #[serde(default)]
    pub id: Option<Value>,
}

/// Request body for the quiz endpoint (POST /quizzes)
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    /// Ids already asked in this quiz session. Only the count is used.
    #[serde(default)]
    pub previous_questions: Vec<Value>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Resolves `quiz_category.id` to an integer.
    pub fn category_id(&self) -> Result<i64, String> {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id.as_ref())
            .ok_or_else(|| "missing quiz_category.id".to_string())
            .and_then(|id| {
                as_integer(id).ok_or_else(|| format!("quiz_category.id {} is not numeric", id))
            })
    }
}

/// JSON truthiness: null, false, zero and empty values are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Reads an integer from a JSON number or a numeric string.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
