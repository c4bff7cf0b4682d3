mod common;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use common::{init_app, seeded_store};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Plays a full round, returning the ids drawn in order.
async fn play_round<S>(app: &S, category: Value) -> Vec<i64>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let mut previous: Vec<i64> = Vec::new();
    loop {
        let req = TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({"previous_questions": previous, "quiz_category": category}))
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        match body.get("question") {
            Some(question) => {
                let id = question["id"].as_i64().unwrap();
                assert!(!previous.contains(&id), "question {} asked twice", id);
                previous.push(id);
            }
            None => return previous,
        }
    }
}

#[actix_rt::test]
async fn test_round_in_category_ends_after_every_question() -> anyhow::Result<()> {
    let app = init_app(seeded_store(9).await?).await;

    let asked = play_round(&app, json!({"type": "Science", "id": 1})).await;
    let asked: HashSet<i64> = asked.into_iter().collect();
    assert_eq!(asked, [1, 3, 5, 7, 9].into_iter().collect());
    Ok(())
}

#[actix_rt::test]
async fn test_all_categories_draws_from_full_pool() -> anyhow::Result<()> {
    let app = init_app(seeded_store(9).await?).await;

    let asked = play_round(&app, json!({"type": "click", "id": 0})).await;
    let asked: HashSet<i64> = asked.into_iter().collect();
    assert_eq!(asked, (1..=10).collect());
    Ok(())
}

#[actix_rt::test]
async fn test_category_id_may_be_a_string() -> anyhow::Result<()> {
    let app = init_app(seeded_store(2).await?).await;

    let asked = play_round(&app, json!({"type": "History", "id": "4"})).await;
    assert_eq!(asked, vec![3]);
    Ok(())
}

#[actix_rt::test]
async fn test_previous_questions_are_never_repeated() -> anyhow::Result<()> {
    let app = init_app(seeded_store(9).await?).await;

    for _ in 0..20 {
        let req = TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": [1, 2, 3, 4, 5, 6, 7, 8],
                "quiz_category": {"id": 0}
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(id == 9 || id == 10);
    }
    Ok(())
}

#[actix_rt::test]
async fn test_missing_fields_are_bad_request() -> anyhow::Result<()> {
    let app = init_app(seeded_store(2).await?).await;

    let bodies = [
        json!({"quiz_category": {"id": 1}}),
        json!({"previous_questions": []}),
        json!({}),
        json!({"previous_questions": [], "quiz_category": {"type": "Science"}}),
    ];
    for payload in bodies {
        let req = TestRequest::post()
            .uri("/quizzes")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 400);
    }
    Ok(())
}

#[actix_rt::test]
async fn test_unknown_quiz_category_is_not_found() -> anyhow::Result<()> {
    let app = init_app(seeded_store(2).await?).await;

    let req = TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({"previous_questions": [], "quiz_category": {"id": 77}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
