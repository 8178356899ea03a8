//! SQLite Store Module
//!
//! Persists categories and questions in a SQLite database through rusqlite.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};
use tracing::debug;

use crate::error::{Result, TriviaError};
use crate::store::{page_offset, Category, NewQuestion, Page, Question, TriviaStore};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    category   INTEGER NOT NULL,
    difficulty INTEGER NOT NULL
);
"#;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQL function folding case with Unicode rules, unlike the built-in `lower`.
const UNICODE_LOWER: &str = "unicode_lower";

// == SQLite Store ==
/// SQLite-backed trivia store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening SQLite database at {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        register_functions(&conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TriviaError::Internal("sqlite connection lock poisoned".to_string()))
    }
}

fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn query_questions<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<Question>> {
    let mut stmt = conn.prepare(sql)?;
    let questions = stmt
        .query_map(params, row_to_question)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(questions)
}

fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        UNICODE_LOWER,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
    )?;
    Ok(())
}

impl TriviaStore for SqliteStore {
    fn categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], row_to_category)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(categories)
    }

    fn category(&self, id: i64) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                row_to_category,
            )
            .optional()?;
        Ok(category)
    }

    fn insert_category(&mut self, kind: &str) -> Result<Category> {
        let conn = self.conn()?;
        conn.execute("INSERT INTO categories (type) VALUES (?1)", params![kind])?;
        Ok(Category {
            id: conn.last_insert_rowid(),
            kind: kind.to_string(),
        })
    }

    fn load_seed(&mut self, categories: &[String], questions: &[NewQuestion]) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for kind in categories {
            tx.execute("INSERT INTO categories (type) VALUES (?1)", params![kind])?;
        }
        for new in questions {
            tx.execute(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
                params![new.question, new.answer, new.category, new.difficulty],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn questions_page(&self, page: usize, per_page: usize) -> Result<Page<Question>> {
        let conn = self.conn()?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        let items = query_questions(
            &conn,
            &format!(
                "SELECT {} FROM questions ORDER BY id LIMIT ?1 OFFSET ?2",
                QUESTION_COLUMNS
            ),
            params![per_page as i64, page_offset(page, per_page) as i64],
        )?;

        Ok(Page {
            items,
            total: total as usize,
        })
    }

    fn question(&self, id: i64) -> Result<Option<Question>> {
        let conn = self.conn()?;
        let question = conn
            .query_row(
                &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
                params![id],
                row_to_question,
            )
            .optional()?;
        Ok(question)
    }

    fn insert_question(&mut self, new: NewQuestion) -> Result<Question> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
            params![new.question, new.answer, new.category, new.difficulty],
        )?;
        Ok(new.with_id(conn.last_insert_rowid()))
    }

    fn delete_question(&mut self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(TriviaError::NotFound(format!("question {}", id)));
        }
        Ok(())
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let conn = self.conn()?;
        query_questions(
            &conn,
            &format!(
                "SELECT {cols} FROM questions \
                 WHERE instr({lower}(question), {lower}(?1)) > 0 ORDER BY id",
                cols = QUESTION_COLUMNS,
                lower = UNICODE_LOWER
            ),
            params![term],
        )
    }

    fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        let conn = self.conn()?;
        query_questions(
            &conn,
            &format!(
                "SELECT {} FROM questions WHERE category = ?1 ORDER BY id",
                QUESTION_COLUMNS
            ),
            params![category],
        )
    }

    fn all_questions(&self) -> Result<Vec<Question>> {
        let conn = self.conn()?;
        query_questions(
            &conn,
            &format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS),
            [],
        )
    }
}
