use crate::{NewQuestion, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Category id to category type
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub question_created: String,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Body of `POST /questions`. A non-empty `searchTerm` selects search mode,
/// anything else is treated as a create request.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub category: Option<i64>,
}

impl QuestionsPostRequest {
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }

    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}
