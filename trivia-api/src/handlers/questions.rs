use crate::error::{ApiError, ApiResult};
use crate::handlers::{category_map, StoreData};
use crate::pagination::{paginate, PageQuery};
use actix_web::{delete, get, post, web, HttpResponse};
use shared_types::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse, QuestionsPostRequest,
    SearchQuestionsResponse,
};
use tracing::{info, warn};

#[get("/questions")]
pub async fn list_questions(
    query: PageQuery,
    store: StoreData,
) -> ApiResult<HttpResponse> {
    let questions = store.list_all().await?;
    if questions.is_empty() {
        warn!("No questions stored");
        return Err(ApiError::NotFound("no questions available".to_string()));
    }

    let categories = store.list_categories().await?;
    let page = query.page_number();
    info!(page, total = questions.len(), "Listing questions");

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions: paginate(page, &questions).to_vec(),
        total_questions: questions.len(),
        categories: category_map(categories),
    }))
}

#[delete("/questions/{question_id}")]
pub async fn delete_question(
    question_id: web::Path<i64>,
    store: StoreData,
) -> ApiResult<HttpResponse> {
    let id = question_id.into_inner();

    if let Err(e) = store.delete_by_id(id).await {
        warn!(question_id = id, error = %e, "Failed to delete question");
        return Err(e.into());
    }

    info!(question_id = id, "Deleted question");
    Ok(HttpResponse::Ok().json(DeleteQuestionResponse {
        success: true,
        deleted: id,
    }))
}

/// Searches when the body carries a non-empty `searchTerm`, otherwise creates
/// a question from the body.
#[post("/questions")]
pub async fn post_questions(
    query: PageQuery,
    body: web::Json<QuestionsPostRequest>,
    store: StoreData,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    let page = query.page_number();

    if let Some(term) = request.search_term() {
        let found = store.search(term).await?;
        if found.is_empty() {
            warn!(search_term = term, "Search matched no questions");
            return Err(ApiError::NotFound(format!(
                "no questions match '{}'",
                term
            )));
        }

        let total_questions = store.count_questions().await?;
        info!(search_term = term, matches = found.len(), "Searched questions");
        return Ok(HttpResponse::Ok().json(SearchQuestionsResponse {
            success: true,
            questions: paginate(page, &found).to_vec(),
            total_questions,
        }));
    }

    // Create mode: the store validates presence of every field
    let created = match store.create(request.into_new_question()).await {
        Ok(created) => created,
        Err(e) => {
            warn!(error = %e, "Rejected new question");
            return Err(e.into());
        }
    };
    info!(
        question_id = created.id,
        category = created.category,
        "Created question"
    );

    // Respond with the refreshed list so the frontend can re-render its page
    let questions = store.list_all().await?;
    Ok(HttpResponse::Ok().json(CreateQuestionResponse {
        success: true,
        created: created.id,
        question_created: created.question,
        questions: paginate(page, &questions).to_vec(),
        total_questions: questions.len(),
    }))
}
