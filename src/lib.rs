//! Trivia API - A small HTTP service for a trivia game
//!
//! Serves categories, paginated questions, search and quiz play over JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::TriviaError;
