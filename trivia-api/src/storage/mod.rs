use async_trait::async_trait;
use shared_types::{Category, NewQuestion, Question};

mod memory;
pub mod migrations;
mod sqlite;

pub use memory::InMemoryQuestionStore;
pub use sqlite::SqliteQuestionStore;

/// Categories every fresh database starts with (see the V3 migration).
pub const STOCK_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Persistence seam for questions and categories. Every list is ordered by id
/// ascending.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    /// Fails with `NotFound` when the category does not exist.
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match on the question text.
    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>, StoreError>;

    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    async fn count_questions(&self) -> Result<usize, StoreError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, _) = &err {
            if failure.code == rusqlite::ErrorCode::ConstraintViolation {
                return StoreError::Validation(err.to_string());
            }
        }
        StoreError::OperationFailed(err.to_string())
    }
}

/// Checks a create payload and returns its fields unpacked.
pub(crate) fn validate_new_question(
    question: NewQuestion,
) -> Result<(String, String, i64, i64), StoreError> {
    let missing = question.missing_fields();
    if !missing.is_empty() {
        return Err(StoreError::Validation(format!(
            "missing field(s): {}",
            missing.join(", ")
        )));
    }

    match question {
        NewQuestion {
            question: Some(text),
            answer: Some(answer),
            difficulty: Some(difficulty),
            category: Some(category),
        } => {
            if difficulty < 1 {
                return Err(StoreError::Validation(format!(
                    "difficulty must be a positive integer, got {difficulty}"
                )));
            }
            Ok((text, answer, difficulty, category))
        }
        _ => Err(StoreError::Validation("incomplete question".to_string())),
    }
}
