//! Request and Response models for the trivia API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateQuestionRequest, QuizCategory, QuizRequest, SearchRequest};
pub use responses::{
    category_map, CategoriesResponse, CategoryMap, CreateQuestionResponse, ErrorResponse,
    HealthResponse, QuestionsResponse, QuizResponse,
};
