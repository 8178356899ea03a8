//! Memory Store Module
//!
//! Ordered in-memory tables with auto-assigned ids.

use std::collections::BTreeMap;

use crate::error::{Result, TriviaError};
use crate::store::{page_offset, Category, NewQuestion, Page, Question, TriviaStore};

// == Memory Store ==
/// In-memory trivia store.
///
/// Ids increase monotonically and are never reused after a delete.
#[derive(Debug)]
pub struct MemoryStore {
    /// Category table keyed by id
    categories: BTreeMap<i64, Category>,
    /// Question table keyed by id
    questions: BTreeMap<i64, Question>,
    next_category_id: i64,
    next_question_id: i64,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
            questions: BTreeMap::new(),
            next_category_id: 1,
            next_question_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaStore for MemoryStore {
    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn category(&self, id: i64) -> Result<Option<Category>> {
        Ok(self.categories.get(&id).cloned())
    }

    fn insert_category(&mut self, kind: &str) -> Result<Category> {
        let category = Category {
            id: self.next_category_id,
            kind: kind.to_string(),
        };
        self.next_category_id += 1;
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    fn load_seed(&mut self, categories: &[String], questions: &[NewQuestion]) -> Result<()> {
        for kind in categories {
            self.insert_category(kind)?;
        }
        for new in questions {
            self.insert_question(new.clone())?;
        }
        Ok(())
    }

    fn questions_page(&self, page: usize, per_page: usize) -> Result<Page<Question>> {
        let items = self
            .questions
            .values()
            .skip(page_offset(page, per_page))
            .take(per_page)
            .cloned()
            .collect();

        Ok(Page {
            items,
            total: self.questions.len(),
        })
    }

    fn question(&self, id: i64) -> Result<Option<Question>> {
        Ok(self.questions.get(&id).cloned())
    }

    fn insert_question(&mut self, new: NewQuestion) -> Result<Question> {
        let question = new.with_id(self.next_question_id);
        self.next_question_id += 1;
        self.questions.insert(question.id, question.clone());
        Ok(question)
    }

    fn delete_question(&mut self, id: i64) -> Result<()> {
        self.questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| TriviaError::NotFound(format!("question {}", id)))
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    fn all_questions(&self) -> Result<Vec<Question>> {
        Ok(self.questions.values().cloned().collect())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn test_store_new() {
        let store = MemoryStore::new();
        assert!(store.all_questions().unwrap().is_empty());
        assert!(store.categories().unwrap().is_empty());
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = MemoryStore::new();

        let first = store.insert_question(new_question("first", 1)).unwrap();
        let second = store.insert_question(new_question("second", 1)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.question(2).unwrap(), Some(second));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = MemoryStore::new();

        let first = store.insert_question(new_question("first", 1)).unwrap();
        store.delete_question(first.id).unwrap();
        let second = store.insert_question(new_question("second", 1)).unwrap();

        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_delete_nonexistent() {
        let mut store = MemoryStore::new();

        let result = store.delete_question(42);
        assert!(matches!(result, Err(TriviaError::NotFound(_))));
    }

    #[test]
    fn test_questions_page() {
        let mut store = MemoryStore::new();
        for i in 0..15 {
            store
                .insert_question(new_question(&format!("q{}", i), 1))
                .unwrap();
        }

        let first = store.questions_page(1, 10).unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 15);
        assert_eq!(first.items[0].id, 1);

        let second = store.questions_page(2, 10).unwrap();
        assert_eq!(second.items.len(), 5);
        assert_eq!(second.items[0].id, 11);

        let zero = store.questions_page(0, 10).unwrap();
        assert_eq!(zero.items, first.items);
    }

    #[test]
    fn test_search_ignores_case() {
        let mut store = MemoryStore::new();
        store
            .insert_question(new_question("What is the test title?", 1))
            .unwrap();
        store
            .insert_question(new_question("Who painted it?", 2))
            .unwrap();

        let found = store.search_questions("TEST").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "What is the test title?");

        assert!(store.search_questions("nothing").unwrap().is_empty());
    }

    #[test]
    fn test_questions_in_category() {
        let mut store = MemoryStore::new();
        store.insert_question(new_question("a", 1)).unwrap();
        store.insert_question(new_question("b", 2)).unwrap();
        store.insert_question(new_question("c", 1)).unwrap();

        let in_one = store.questions_in_category(1).unwrap();
        assert_eq!(
            in_one.iter().map(|q| q.question.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert!(store.questions_in_category(9).unwrap().is_empty());
    }

    #[test]
    fn test_categories_in_id_order() {
        let mut store = MemoryStore::new();
        store.insert_category("Science").unwrap();
        store.insert_category("Art").unwrap();

        let categories = store.categories().unwrap();
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(categories[1].kind, "Art");
        assert_eq!(store.category(2).unwrap().unwrap().kind, "Art");
        assert!(store.category(3).unwrap().is_none());
    }
}
