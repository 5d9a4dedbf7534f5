//! Sitemap endpoint.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Category, Post};
use quill_core::sitemap::build_sitemap;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /sitemap.xml
///
/// Served outside the /api scope; crawlers expect it at the site root.
pub async fn sitemap(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<Post> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(|joined| joined.post)
        .collect();
    let categories: Vec<Category> = state.categories.list().await?;

    let xml = build_sitemap(&state.base_url, &posts, &categories);

    Ok(HttpResponse::Ok()
        .content_type("application/xml")
        .body(xml))
}
