use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, CategoryPatch, Post, PostPatch, PostWithCategory, User, UserPatch};
use crate::error::RepoError;

/// Post repository. Posts are keyed externally by slug, not id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts with their joined category, most recent first.
    async fn list(&self) -> Result<Vec<PostWithCategory>, RepoError>;

    /// Find a single post by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostWithCategory>, RepoError>;

    /// Persist a new post and return it with its joined category.
    /// A taken slug surfaces as `RepoError::Constraint`.
    async fn create(&self, post: Post) -> Result<PostWithCategory, RepoError>;

    /// Apply a sparse patch to the post with this slug. Fields absent
    /// from the patch keep their stored values. Returns `None` when no
    /// post has the slug.
    async fn update_by_slug(
        &self,
        slug: &str,
        patch: PostPatch,
    ) -> Result<Option<PostWithCategory>, RepoError>;

    /// Delete the post with this slug. `RepoError::NotFound` when no
    /// row matched.
    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError>;
}

/// Category repository. Categories are never deleted through this port.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, name ascending.
    async fn list(&self) -> Result<Vec<Category>, RepoError>;

    /// Persist a new category. A taken slug surfaces as
    /// `RepoError::Constraint` so callers can branch on "already exists".
    async fn create(&self, category: Category) -> Result<Category, RepoError>;

    /// Apply a sparse patch by id. Returns `None` when the id is unknown.
    async fn update(&self, id: Uuid, patch: CategoryPatch)
    -> Result<Option<Category>, RepoError>;
}

/// User repository. Users are never deleted through this port.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, newest account first.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Persist a new user.
    async fn create(&self, user: User) -> Result<User, RepoError>;

    /// Apply a sparse patch by id. Returns `None` when the id is unknown.
    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, RepoError>;
}
