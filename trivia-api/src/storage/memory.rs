use crate::storage::{validate_new_question, QuestionStore, StoreError};
use async_trait::async_trait;
use shared_types::{Category, NewQuestion, Question};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_question_id: i64,
}

/// Process-local store with the same semantics as the SQLite one.
#[derive(Clone, Default)]
pub struct InMemoryQuestionStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let store = Self::new();
        if let Ok(mut tables) = store.tables.lock() {
            for (id, kind) in categories {
                tables.categories.insert(
                    id,
                    Category {
                        id,
                        kind: kind.into(),
                    },
                );
            }
        }
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|e| StoreError::OperationFailed(format!("Lock error: {}", e)))
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.lock()?.questions.values().cloned().collect())
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        let tables = self.lock()?;
        if !tables.categories.contains_key(&category_id) {
            return Err(StoreError::NotFound(format!("category {}", category_id)));
        }
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .lock()?
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>, StoreError> {
        Ok(self.lock()?.questions.get(&id).cloned())
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let (text, answer, difficulty, category) = validate_new_question(question)?;

        let mut tables = self.lock()?;
        if !tables.categories.contains_key(&category) {
            return Err(StoreError::Validation(format!(
                "category {} does not exist",
                category
            )));
        }

        // Ids only ever grow, matching SQLite AUTOINCREMENT
        tables.last_question_id += 1;
        let created = Question {
            id: tables.last_question_id,
            question: text,
            answer,
            category,
            difficulty,
        };
        tables.questions.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.lock()?
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("question {}", id)))
    }

    async fn count_questions(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.questions.len())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.lock()?.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        Ok(self.lock()?.categories.get(&id).cloned())
    }
}
