use crate::Question;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category ids arrive either as numbers or as the string keys of the
/// categories map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryIdValue {
    Number(i64),
    Text(String),
}

impl CategoryIdValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CategoryIdValue::Number(id) => Some(*id),
            CategoryIdValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizCategoryRef {
    #[serde(default)]
    pub id: Option<CategoryIdValue>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryRef>,
}

/// `question` is omitted once every question of the round has been asked.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
