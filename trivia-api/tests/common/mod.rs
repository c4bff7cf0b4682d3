#![allow(dead_code)]

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use shared_types::NewQuestion;
use std::sync::Arc;
use trivia_api::storage::{InMemoryQuestionStore, QuestionStore, STOCK_CATEGORIES};
use trivia_api::{configure, handlers};

pub const CAGED_BIRD: &str =
    "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?";

pub async fn init_app(
    store: Arc<dyn QuestionStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(store))
            .configure(configure)
            .default_service(web::to(handlers::not_found)),
    )
    .await
}

pub fn empty_store() -> Arc<InMemoryQuestionStore> {
    Arc::new(InMemoryQuestionStore::with_categories(STOCK_CATEGORIES))
}

/// Store with the stock categories and `count` generic questions that
/// alternate between Science (1) and Art (2), followed by one History (4)
/// question whose text contains "title".
pub async fn seeded_store(count: usize) -> anyhow::Result<Arc<InMemoryQuestionStore>> {
    let store = empty_store();
    seed_questions(store.as_ref(), count).await?;
    Ok(store)
}

pub async fn seed_questions(store: &dyn QuestionStore, count: usize) -> anyhow::Result<()> {
    for i in 0..count {
        let category = if i % 2 == 0 { 1 } else { 2 };
        store
            .create(NewQuestion::new(
                &format!("Generic question number {}", i + 1),
                &format!("Answer {}", i + 1),
                (i % 5) as i64 + 1,
                category,
            ))
            .await?;
    }
    store
        .create(NewQuestion::new(CAGED_BIRD, "Maya Angelou", 2, 4))
        .await?;
    Ok(())
}
