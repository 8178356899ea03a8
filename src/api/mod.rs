//! API Module
//!
//! HTTP handlers and routing for the trivia REST API.
//!
//! # Endpoints
//! - `GET /categories` - Category dictionary
//! - `GET /questions` - First page of questions
//! - `POST /questions` - Create a question
//! - `DELETE /questions/:id` - Delete a question
//! - `POST /questions/search` - Search questions
//! - `GET /categories/:id/questions` - Questions by category
//! - `POST /quizzes` - Next quiz question
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
