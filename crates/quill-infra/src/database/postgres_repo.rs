//! PostgreSQL repository implementations.
//!
//! Partial updates are statically shaped: the current row is loaded,
//! then each provided patch field becomes one `Set` on the ActiveModel.
//! No SQL fragments are assembled from request data.

use async_trait::async_trait;
use sea_orm::entity::prelude::Json;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use quill_core::domain::{
    Category, CategoryPatch, Post, PostPatch, PostWithCategory, User, UserPatch,
};
use quill_core::error::RepoError;
use quill_core::ports::{CategoryRepository, PostRepository, UserRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// PostgreSQL category repository.
pub struct PostgresCategoryRepository {
    db: DbConn,
}

impl PostgresCategoryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_write_err(e: DbErr) -> RepoError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => RepoError::Constraint(msg),
        _ => RepoError::Query(e.to_string()),
    }
}

fn joined(row: (post::Model, Option<category::Model>)) -> PostWithCategory {
    let (post, category) = row;
    PostWithCategory {
        post: post.into(),
        category: category.map(Into::into),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<PostWithCategory>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(CategoryEntity)
            .order_by_desc(post::Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(joined).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostWithCategory>, RepoError> {
        tracing::debug!(post_slug = %slug, "Finding post by slug");

        let row = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(joined))
    }

    async fn create(&self, post: Post) -> Result<PostWithCategory, RepoError> {
        let slug = post.slug.clone();
        let active: post::ActiveModel = post.into();
        active.insert(&self.db).await.map_err(map_write_err)?;

        // Re-read through the category join so the caller gets the
        // fully shaped row.
        self.find_by_slug(&slug).await?.ok_or(RepoError::NotFound)
    }

    async fn update_by_slug(
        &self,
        slug: &str,
        patch: PostPatch,
    ) -> Result<Option<PostWithCategory>, RepoError> {
        let Some(current) = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        // An all-empty patch is a valid no-op for posts.
        if !patch.is_empty() {
            let mut active = current.into_active_model();
            if let Some(title) = patch.title {
                active.title = Set(title);
            }
            if let Some(excerpt) = patch.excerpt {
                active.excerpt = Set(Some(excerpt));
            }
            if let Some(content) = patch.content {
                active.content = Set(Some(content));
            }
            if let Some(cover_image) = patch.cover_image {
                active.cover_image = Set(Some(cover_image));
            }
            if let Some(images) = patch.images {
                active.images = Set(Json::from(images));
            }
            if let Some(author_name) = patch.author_name {
                active.author_name = Set(Some(author_name));
            }
            if let Some(category_slug) = patch.category_slug {
                active.category_slug = Set(Some(category_slug));
            }
            if let Some(tags) = patch.tags {
                active.tags = Set(tags);
            }
            if let Some(is_trending) = patch.is_trending {
                active.is_trending = Set(is_trending);
            }
            if let Some(is_featured) = patch.is_featured {
                active.is_featured = Set(is_featured);
            }
            if let Some(read_time) = patch.read_time {
                active.read_time = Set(read_time);
            }

            match active.update(&self.db).await {
                Ok(_) => {}
                // Row vanished between the read and the write.
                Err(DbErr::RecordNotUpdated) => return Ok(None),
                Err(e) => return Err(map_write_err(e)),
            }
        }

        self.find_by_slug(slug).await
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let rows = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, cat: Category) -> Result<Category, RepoError> {
        let active: category::ActiveModel = cat.into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, RepoError> {
        tracing::debug!(category_id = %id, "Updating category");

        let Some(current) = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active = current.into_active_model();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(slug) = patch.slug {
            active.slug = Set(slug);
        }

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_write_err(e)),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let rows = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_user: User) -> Result<User, RepoError> {
        let active: user::ActiveModel = new_user.into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_id = %id, "Updating user");

        let Some(current) = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active = current.into_active_model();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(role) = patch.role {
            active.role = Set(role.into());
        }
        if let Some(photo_url) = patch.photo_url {
            active.photo_url = Set(Some(photo_url));
        }
        if let Some(bio) = patch.bio {
            active.bio = Set(Some(bio));
        }

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_write_err(e)),
        }
    }
}
