//! Response DTOs for the trivia API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::store::{Category, Question};

/// Category id to category name. Ids serialize as string keys.
pub type CategoryMap = BTreeMap<i64, String>;

/// Builds the category dictionary sent alongside question listings.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Response body for GET /categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// Response body shared by every question listing
///
/// `total_questions` counts all matching rows, which may exceed the number of
/// entries in `questions`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
    pub total_questions: usize,
}

impl QuestionsResponse {
    pub fn new(
        questions: Vec<Question>,
        categories: CategoryMap,
        current_category: Option<String>,
        total_questions: usize,
    ) -> Self {
        Self {
            success: true,
            questions,
            categories,
            current_category,
            total_questions,
        }
    }
}

/// Response body for POST /questions
///
/// Echoes the submitted mapping with the new row's `id` and `success` added.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CreateQuestionResponse(Map<String, Value>);

impl CreateQuestionResponse {
    pub fn new(submitted: Map<String, Value>, id: i64) -> Self {
        let mut body = submitted;
        body.insert("id".to_string(), Value::from(id));
        body.insert("success".to_string(), Value::Bool(true));
        Self(body)
    }

    /// Looks up a field of the response body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Response body for POST /quizzes
///
/// `question` is null once the selected category has no questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(rename = "quizCategory")]
    pub quiz_category: String,
    pub categories: CategoryMap,
    pub question: Option<Question>,
}

impl QuizResponse {
    pub fn new(quiz_category: String, categories: CategoryMap, question: Option<Question>) -> Self {
        Self {
            success: true,
            quiz_category,
            categories,
            question,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// HTTP status code
    pub error: u16,
    /// Short description of the failure
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}
