use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{PageQuery, PageResponse, RegisterUserRequest, UpdateUserRequest};
use crate::routes::AppState;
use crate::services::CacheKey;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users", web::post().to(register_user))
        .route("/users", web::get().to(list_users))
        .route("/users/{user_id}", web::get().to(get_user))
        .route("/users/{user_id}", web::put().to(update_user))
        .route("/users/{user_id}", web::delete().to(delete_user));
}

/// Register a user
///
/// POST /api/v1/users
///
/// Request body:
/// ```json
/// {
///   "email": "ana@example.com",
///   "fullName": "Ana"
/// }
/// ```
async fn register_user(
    state: web::Data<AppState>,
    req: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user = state
        .postgres
        .create_user(&req.email, req.full_name.as_deref())
        .await?;

    tracing::info!("Registered user {}", user.id);

    Ok(HttpResponse::Created().json(user))
}

/// GET /api/v1/users?page=1&size=10
async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let (users, total) = state
        .postgres
        .list_users(query.size, query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(PageResponse::new(query.page, query.size, total, users)))
}

async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    match state.postgres.get_user(&user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ApiError::NotFound(format!("User not found: {}", user_id))),
    }
}

/// Update a user
///
/// PUT /api/v1/users/{user_id}
///
/// Request body (at least one field):
/// ```json
/// {
///   "fullName": "Ana Maria",
///   "isActive": false
/// }
/// ```
async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user_id = path.into_inner();

    match state
        .postgres
        .update_user(&user_id, req.full_name.as_deref(), req.is_active)
        .await?
    {
        Some(user) => {
            tracing::info!("Updated user {}", user_id);
            Ok(HttpResponse::Ok().json(user))
        }
        None => Err(ApiError::NotFound(format!("User not found: {}", user_id))),
    }
}

/// Delete a user together with their answers
async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    if !state.postgres.delete_user(&user_id).await? {
        return Err(ApiError::NotFound(format!("User not found: {}", user_id)));
    }

    if let Err(e) = state.cache.delete(&CacheKey::answers(&user_id)).await {
        tracing::warn!("Failed to invalidate cache: {}", e);
    }

    tracing::info!("Deleted user {}", user_id);

    Ok(HttpResponse::NoContent().finish())
}
