use crate::helpers::database::UNICODE_LOWER_FN;
use crate::storage::{validate_new_question, QuestionStore, StoreError};
use crate::DbConnection;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use shared_types::{Category, NewQuestion, Question};
use std::sync::MutexGuard;
use tracing::debug;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct SqliteQuestionStore {
    connection: DbConnection,
}

impl SqliteQuestionStore {
    pub fn new(connection: DbConnection) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.connection
            .lock()
            .map_err(|e| StoreError::OperationFailed(format!("Lock error: {}", e)))
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}

/// Lowercases the term and escapes LIKE wildcards so it only ever matches
/// literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl QuestionStore for SqliteQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let conn = self.lock()?;
        let questions = conn
            .prepare(&format!(
                "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id ASC"
            ))?
            .query_map([], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        let conn = self.lock()?;

        // Distinguish an unknown category from an empty one
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)",
            params![category_id],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StoreError::NotFound(format!("category {}", category_id)));
        }

        let questions = conn
            .prepare(&format!(
                "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id ASC"
            ))?
            .query_map(params![category_id], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let conn = self.lock()?;
        let questions = conn
            .prepare(&format!(
                r"SELECT {QUESTION_COLUMNS} FROM questions
                 WHERE {UNICODE_LOWER_FN}(question) LIKE ?1 ESCAPE '\'
                 ORDER BY id ASC"
            ))?
            .query_map(params![like_pattern(term)], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let conn = self.lock()?;
        let question = conn
            .query_row(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
                params![id],
                question_from_row,
            )
            .optional()?;
        Ok(question)
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let (text, answer, difficulty, category) = validate_new_question(question)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO questions (question, answer, difficulty, category)
             VALUES (?1, ?2, ?3, ?4)",
            params![text, answer, difficulty, category],
        )?;

        let id = conn.last_insert_rowid();
        debug!(question_id = id, category, "Inserted question row");

        Ok(Question {
            id,
            question: text,
            answer,
            category,
            difficulty,
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound(format!("question {}", id)));
        }
        Ok(())
    }

    async fn count_questions(&self) -> Result<usize, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let conn = self.lock()?;
        let categories = conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC")?
            .query_map([], category_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let conn = self.lock()?;
        let category = conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                category_from_row,
            )
            .optional()?;
        Ok(category)
    }
}
