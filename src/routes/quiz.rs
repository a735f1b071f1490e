use actix_web::{web, HttpResponse};

use crate::core::quiz::find_question;
use crate::core::QUESTIONS;
use crate::error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/quiz", web::get().to(list_questions))
        .route("/quiz/{question_id}", web::get().to(get_question));
}

/// GET /api/v1/quiz
async fn list_questions() -> HttpResponse {
    HttpResponse::Ok().json(&QUESTIONS)
}

/// GET /api/v1/quiz/{question_id}
async fn get_question(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let question_id = path.into_inner();

    find_question(&question_id)
        .map(|question| HttpResponse::Ok().json(question))
        .ok_or_else(|| ApiError::NotFound(format!("Unknown question: {}", question_id)))
}
