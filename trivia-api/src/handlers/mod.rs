pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::error::{ApiError, ApiResult};
use crate::storage::QuestionStore;
use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::Category;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

pub type StoreData = web::Data<Arc<dyn QuestionStore>>;

pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Fallback for routes that match nothing.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    warn!(method = %req.method(), path = %req.path(), "No route matched");
    Err(ApiError::NotFound(format!("{} {}", req.method(), req.path())))
}
