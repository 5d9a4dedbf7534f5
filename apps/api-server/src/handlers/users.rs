//! User resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{User, UserPatch};
use quill_shared::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let body: Vec<UserResponse> = users.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
///
/// Role is validated against the closed set at deserialization; the
/// storage layer re-enforces it with a CHECK constraint.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.is_empty() || req.email.is_empty() {
        return Err(AppError::BadRequest(
            "name, email, and role are required".to_string(),
        ));
    }

    let user = state.users.create(User::new(req.name, req.email, req.role)).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// PATCH /api/users/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch: UserPatch = body.into_inner().into();

    if patch.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let user = state
        .users
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
