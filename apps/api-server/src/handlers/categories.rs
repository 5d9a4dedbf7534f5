//! Category resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Category, CategoryPatch};
use quill_core::error::RepoError;
use quill_shared::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/categories
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list().await?;
    let body: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/categories
///
/// Re-creating an existing slug is a distinct 409 outcome: the seed
/// workflow branches on it to stay idempotent.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.is_empty() || req.slug.is_empty() {
        return Err(AppError::BadRequest("name and slug are required".to_string()));
    }

    match state.categories.create(Category::new(req.name, req.slug)).await {
        Ok(category) => Ok(HttpResponse::Created().json(CategoryResponse::from(category))),
        Err(RepoError::Constraint(_)) => {
            Err(AppError::Conflict("Category slug already exists".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// PATCH /api/categories/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch: CategoryPatch = body.into_inner().into();

    if patch.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let category = state
        .categories
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}
