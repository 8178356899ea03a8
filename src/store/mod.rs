//! Store Module
//!
//! Category and question storage behind the [`TriviaStore`] trait, with an
//! in-memory backend and a SQLite backend.

mod memory;
mod seed;
mod sqlite;


use serde::{Deserialize, Serialize};

use crate::error::Result;

// Re-export public types
pub use memory::MemoryStore;
pub use seed::Seed;
pub use sqlite::SqliteStore;

// == Rows ==
/// A topic grouping for questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single trivia item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Insert payload for a question; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// One page of rows together with the unpaginated row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

// == Store Trait ==
/// Store-access interface injected into every request handler.
///
/// All listings are ordered by ascending id.
pub trait TriviaStore: Send + Sync {
    /// Returns every category.
    fn categories(&self) -> Result<Vec<Category>>;

    /// Looks up a single category.
    fn category(&self, id: i64) -> Result<Option<Category>>;

    /// Adds a category. Only used when seeding.
    fn insert_category(&mut self, kind: &str) -> Result<Category>;

    /// Writes all seed rows, or none of them if any insert fails.
    fn load_seed(&mut self, categories: &[String], questions: &[NewQuestion]) -> Result<()>;

    /// Returns the 1-based `page` of questions. Page 0 is treated as page 1.
    fn questions_page(&self, page: usize, per_page: usize) -> Result<Page<Question>>;

    /// Looks up a single question.
    fn question(&self, id: i64) -> Result<Option<Question>>;

    /// Inserts a question and returns it with its assigned id.
    fn insert_question(&mut self, new: NewQuestion) -> Result<Question>;

    /// Removes a question, failing with `NotFound` when absent.
    fn delete_question(&mut self, id: i64) -> Result<()>;

    /// Questions whose text contains `term`, ignoring case.
    fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Questions belonging to the given category.
    fn questions_in_category(&self, category: i64) -> Result<Vec<Question>>;

    /// Every question.
    fn all_questions(&self) -> Result<Vec<Question>>;
}

/// Zero-based offset of a 1-based page.
pub(crate) fn page_offset(page: usize, per_page: usize) -> usize {
    page.max(1).saturating_sub(1).saturating_mul(per_page)
}
