use crate::error::{ApiError, ApiResult};
use crate::handlers::{category_map, StoreData};
use crate::pagination::{paginate, PageQuery};
use actix_web::{get, web, HttpResponse};
use shared_types::{CategoriesResponse, CategoryQuestionsResponse};
use tracing::{info, warn};

#[get("/categories")]
pub async fn list_categories(store: StoreData) -> ApiResult<HttpResponse> {
    let categories = store.list_categories().await?;
    if categories.is_empty() {
        warn!("No categories available");
        return Err(ApiError::NotFound("no categories available".to_string()));
    }

    info!(category_count = categories.len(), "Listing categories");
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

#[get("/categories/{category_id}/questions")]
pub async fn list_category_questions(
    category_id: web::Path<i64>,
    query: PageQuery,
    store: StoreData,
) -> ApiResult<HttpResponse> {
    let id = category_id.into_inner();

    let category = match store.get_category(id).await? {
        Some(category) => category,
        None => {
            warn!(category_id = id, "Category not found");
            return Err(ApiError::NotFound(format!("category {}", id)));
        }
    };

    let questions = store.list_by_category(category.id).await?;
    let total_questions = store.count_questions().await?;
    let page = query.page_number();
    info!(
        category_id = id,
        page,
        question_count = questions.len(),
        "Listing questions in category"
    );

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(page, &questions).to_vec(),
        total_questions,
        current_category: category.kind,
    }))
}
