//! Post resource handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostPatch};
use quill_core::error::RepoError;
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use quill_shared::response::MessageResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
///
/// All posts with their joined category, most recent first. Filtering
/// by trending/featured/category happens client-side over this list.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/posts
///
/// A taken slug is NOT reported as a conflict: the storage error maps
/// to a generic failure. Categories are the only resource with a
/// distinct "already exists" outcome.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(req.into());
    let created = state.posts.create(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(created)))
}

/// PATCH /api/posts/{slug}
///
/// Coalescing partial update: fields absent from the payload keep their
/// stored values, so `{ "isFeatured": true }` alone never clobbers
/// title or content. The 404 on an unknown slug is load-bearing - the
/// admin client falls back to POST /api/posts with the same slug,
/// making the pair behave as an upsert.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let patch: PostPatch = body.into_inner().into();

    let post = state
        .posts
        .update_by_slug(&slug, patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/{slug}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    match state.posts.delete_by_slug(&slug).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully"))),
        Err(RepoError::NotFound) => Err(AppError::NotFound("Post not found".to_string())),
        Err(e) => Err(e.into()),
    }
}
