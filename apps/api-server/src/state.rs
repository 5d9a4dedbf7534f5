//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{CategoryRepository, PostRepository, UserRepository};
use quill_infra::database::{
    PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository,
};
use sea_orm::DbConn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub users: Arc<dyn UserRepository>,
    /// Public origin used for sitemap locations.
    pub base_url: String,
}

impl AppState {
    /// Build the application state over a connected database.
    pub fn new(db: DbConn, base_url: String) -> Self {
        Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            users: Arc::new(PostgresUserRepository::new(db)),
            base_url,
        }
    }
}
