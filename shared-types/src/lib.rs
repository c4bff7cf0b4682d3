use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod questions;
pub mod quiz;

pub use questions::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionResponse, DeleteQuestionResponse,
    QuestionListResponse, QuestionsPostRequest, SearchQuestionsResponse,
};
pub use quiz::{CategoryIdValue, QuizCategoryRef, QuizRequest, QuizResponse};

// Shared models for the trivia api and its web frontend

/// A single trivia question as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category id the question belongs to
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Fields for a question that does not exist yet. Every field is optional on
/// the wire; the store rejects incomplete payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

impl NewQuestion {
    pub fn new(question: &str, answer: &str, difficulty: i64, category: i64) -> Self {
        Self {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            difficulty: Some(difficulty),
            category: Some(category),
        }
    }

    /// Names of the fields that are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.question.is_none() {
            missing.push("question");
        }
        if self.answer.is_none() {
            missing.push("answer");
        }
        if self.difficulty.is_none() {
            missing.push("difficulty");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_kind_as_type() {
        let category = Category {
            id: 1,
            kind: "Science".to_string(),
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn missing_fields_lists_absent_values() {
        let new = NewQuestion {
            question: Some("Q".to_string()),
            difficulty: Some(2),
            ..Default::default()
        };
        assert_eq!(new.missing_fields(), vec!["answer", "category"]);
        assert!(NewQuestion::new("Q", "A", 3, 1).missing_fields().is_empty());
    }
}
