use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::core::quiz::unrecognized_positions;
use crate::error::ApiError;
use crate::models::{
    AnswerSet, FindMatchesRequest, FindMatchesResponse, HealthResponse, PairScoreResponse,
    SubmitAnswersRequest, SubmitAnswersResponse,
};
use crate::routes::AppState;
use crate::services::{CacheError, CacheKey};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matching/answers", web::post().to(submit_answers))
        .route("/matching/score/{user1_id}/{user2_id}", web::get().to(pair_score))
        .route("/matching/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Submit quiz answers
///
/// POST /api/v1/matching/answers
///
/// Request body:
/// ```json
/// {
///   "userId": "uuid",
///   "answers": ["...", "...", "...", "...", "...", "...", "...", "..."]
/// }
/// ```
async fn submit_answers(
    state: web::Data<AppState>,
    req: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for submit_answers: user={}, answers={}",
            req.user_id,
            req.answers.len()
        );
        return Err(errors.into());
    }

    let user_id = req.user_id;

    if state.postgres.get_user(&user_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("User not found: {}", user_id)));
    }

    // Unknown text still scores (with default sub-scores), but usually means option drift
    let unrecognized = unrecognized_positions(&req.answers);
    if !unrecognized.is_empty() {
        tracing::warn!(
            "User {} submitted unrecognized answers at positions {:?}",
            user_id,
            unrecognized
        );
    }

    let embedding = state.embedder.embed(&req.answers).await?;
    let stored = state
        .postgres
        .save_answers(&user_id, &req.answers, &embedding)
        .await?;

    if let Err(e) = state.cache.delete(&CacheKey::answers(&user_id)).await {
        tracing::warn!("Failed to invalidate cache: {}", e);
    }

    tracing::info!(
        "Stored answers for user {} ({} embedding, {} dims)",
        user_id,
        state.embedder.name(),
        stored.embedding.len()
    );

    Ok(HttpResponse::Ok().json(SubmitAnswersResponse {
        user_id,
        unrecognized,
        embedding_dim: stored.embedding.len(),
    }))
}

/// Compatibility score for two users
///
/// GET /api/v1/matching/score/{user1_id}/{user2_id}
async fn pair_score(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (user1_id, user2_id) = path.into_inner();

    if user1_id == user2_id {
        return Err(ApiError::BadRequest(
            "Cannot score a user against themselves".to_string(),
        ));
    }

    let first = require_answer_set(&state, &user1_id).await?;
    let second = require_answer_set(&state, &user2_id).await?;

    let breakdown = state.matcher.scorer().explain(&first.answers, &second.answers)?;

    tracing::debug!("Scored {} vs {}: {}", user1_id, user2_id, breakdown.score);

    Ok(HttpResponse::Ok().json(PairScoreResponse {
        user1_id,
        user2_id,
        score: breakdown.score,
        breakdown,
    }))
}

/// Find matches endpoint
///
/// POST /api/v1/matching/find
///
/// Request body:
/// ```json
/// {
///   "userId": "uuid",
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user_id = req.user_id;
    let limit = state.limits.resolve(req.limit);

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

    let subject = require_answer_set(&state, &user_id).await?;

    let candidates = state
        .postgres
        .list_answer_sets(&user_id, state.limits.candidate_pool)
        .await?;

    tracing::debug!("Found {} candidates for {}", candidates.len(), user_id);

    let result = state.matcher.find_matches(&subject, candidates, limit)?;

    if result.skipped > 0 {
        tracing::warn!("Skipped {} incomplete answer sets", result.skipped);
    }

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(FindMatchesResponse {
        user_id,
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}

/// Load a user's answer set, failing when it is missing or incomplete
async fn require_answer_set(state: &AppState, user_id: &Uuid) -> Result<AnswerSet, ApiError> {
    let answer_set = load_answer_set(state, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No answers submitted for user {}", user_id)))?;

    if !answer_set.is_complete() {
        return Err(ApiError::IncompleteAnswers(format!(
            "User {} has {} answers",
            user_id,
            answer_set.answers.len()
        )));
    }

    Ok(answer_set)
}

/// Read-through cache lookup for a stored answer set
async fn load_answer_set(state: &AppState, user_id: &Uuid) -> Result<Option<AnswerSet>, ApiError> {
    let cache_key = CacheKey::answers(user_id);

    match state.cache.get::<AnswerSet>(&cache_key).await {
        Ok(answer_set) => return Ok(Some(answer_set)),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", cache_key, e),
    }

    let answer_set = state.postgres.get_answer_set(user_id).await?;

    if let Some(answer_set) = &answer_set {
        if let Err(e) = state.cache.set(&cache_key, answer_set).await {
            tracing::warn!("Failed to cache answers for {}: {}", user_id, e);
        }
    }

    Ok(answer_set)
}
