//! Seed data for fresh stores.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::store::{NewQuestion, TriviaStore};

const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Categories and questions loaded into an empty store.
///
/// Question `category` values refer to category ids, which are assigned
/// from 1 in the order the categories are listed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

impl Seed {
    /// The standard trivia categories with no questions.
    pub fn default_categories() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            questions: Vec::new(),
        }
    }

    /// Reads a JSON seed file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }

    /// Loads the seed unless the store already has categories.
    ///
    /// Returns whether anything was written.
    pub fn apply(&self, store: &mut dyn TriviaStore) -> Result<bool> {
        if !store.categories()?.is_empty() {
            return Ok(false);
        }

        store.load_seed(&self.categories, &self.questions)?;

        info!(
            "Seeded store with {} categories and {} questions",
            self.categories.len(),
            self.questions.len()
        );
        Ok(true)
    }
}
