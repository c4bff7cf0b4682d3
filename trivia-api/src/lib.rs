use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod logging;
pub mod pagination;
pub mod quiz;
pub mod storage;

use config::CorsConfig;
use error::ApiError;

pub type DbConnection = Arc<Mutex<Connection>>;

/// Registers every endpoint plus the extractor configs that turn malformed
/// input into the JSON error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::NotFound(err.to_string()).into()),
    )
    .service(handlers::categories::list_categories)
    .service(handlers::categories::list_category_questions)
    .service(handlers::questions::list_questions)
    .service(handlers::questions::delete_question)
    .service(handlers::questions::post_questions)
    .service(handlers::quizzes::next_quiz_question);
}

pub fn cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
