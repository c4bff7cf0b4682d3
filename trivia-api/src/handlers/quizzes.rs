use crate::error::{ApiError, ApiResult};
use crate::handlers::StoreData;
use crate::quiz::{next_question, QuizCategory, QuizDraw};
use actix_web::{post, web, HttpResponse};
use shared_types::{QuizRequest, QuizResponse};
use std::collections::HashSet;
use tracing::{info, warn};

#[post("/quizzes")]
pub async fn next_quiz_question(
    body: web::Json<QuizRequest>,
    store: StoreData,
) -> ApiResult<HttpResponse> {
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = body.into_inner();

    let (Some(previous), Some(quiz_category)) = (previous_questions, quiz_category) else {
        warn!("Quiz request without previous_questions or quiz_category");
        return Err(ApiError::BadRequest(
            "previous_questions and quiz_category are required".to_string(),
        ));
    };

    let category_id = quiz_category
        .id
        .as_ref()
        .and_then(|id| id.as_i64())
        .ok_or_else(|| ApiError::BadRequest("quiz_category.id must be an integer".to_string()))?;

    let category = QuizCategory::from(category_id);
    let previous: HashSet<i64> = previous.into_iter().collect();

    let mut rng = rand::rng();
    let draw = next_question(store.get_ref().as_ref(), category, &previous, &mut rng).await?;

    let question = match draw {
        QuizDraw::Question(question) => {
            info!(
                question_id = question.id,
                category_id,
                asked = previous.len(),
                "Drew quiz question"
            );
            Some(question)
        }
        QuizDraw::Exhausted => {
            info!(category_id, asked = previous.len(), "Quiz round exhausted");
            None
        }
    };

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}
