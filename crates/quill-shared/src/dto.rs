//! Data Transfer Objects - request/response types for the API.
//!
//! This is the mapping layer between stored rows and the public JSON
//! contract. The shape the admin UI and public site consume is
//! camelCase, with `category` and `author` always materialized as
//! objects (never null).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{
    Category, CategoryPatch, NewPost, PostPatch, PostWithCategory, User, UserPatch, UserRole,
};

/// The author object embedded in a post response.
///
/// `id` is always empty: authors are carried as display names only and
/// resolved against user accounts by the UI, not by this API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: String,
    pub name: String,
}

/// The category object embedded in a post response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// A post as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub date: DateTime<Utc>,
    pub author: AuthorRef,
    pub category: CategoryRef,
    pub tags: Vec<String>,
    pub is_trending: bool,
    pub is_featured: bool,
    pub read_time: i32,
    pub views: i32,
}

impl From<PostWithCategory> for PostResponse {
    fn from(joined: PostWithCategory) -> Self {
        let PostWithCategory { post, category } = joined;

        // A post whose category_slug matches no stored category still
        // renders a category object: the raw slug doubles as the name.
        let category = match category {
            Some(c) => CategoryRef {
                id: c.id.to_string(),
                name: c.name,
                slug: c.slug,
            },
            None => {
                let slug = post.category_slug.clone().unwrap_or_default();
                CategoryRef {
                    id: String::new(),
                    name: slug.clone(),
                    slug,
                }
            }
        };

        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_image: post.cover_image,
            images: post.images,
            date: post.date,
            author: AuthorRef {
                id: String::new(),
                name: post.author_name.unwrap_or_default(),
            },
            category,
            tags: post.tags,
            is_trending: post.is_trending,
            is_featured: post.is_featured,
            read_time: post.read_time,
            views: post.views,
        }
    }
}

/// Request to create a post. Everything beyond title and slug is
/// optional and defaults like a blank draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub read_time: i32,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            excerpt: req.excerpt,
            content: req.content,
            cover_image: req.cover_image,
            images: req.images,
            date: req.date,
            author_name: req.author_name,
            category_slug: req.category_slug,
            tags: req.tags,
            is_trending: req.is_trending,
            is_featured: req.is_featured,
            read_time: req.read_time,
        }
    }
}

/// Partial update of a post. Absent fields keep their stored values;
/// slug, date, and views are not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub author_name: Option<String>,
    pub category_slug: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_trending: Option<bool>,
    pub is_featured: Option<bool>,
    pub read_time: Option<i32>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            excerpt: req.excerpt,
            content: req.content,
            cover_image: req.cover_image,
            images: req.images,
            author_name: req.author_name,
            category_slug: req.category_slug,
            tags: req.tags,
            is_trending: req.is_trending,
            is_featured: req.is_featured,
            read_time: req.read_time,
        }
    }
}

/// A category as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
        }
    }
}

/// Request to create a category. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
}

/// Partial update of a category. At least one field must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryPatch {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug,
        }
    }
}

/// A user as served to clients. `photoUrl` and `bio` serialize as null
/// when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            photo_url: user.photo_url,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

/// Request to create a user. Role must be one of the closed set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Partial update of a user profile. At least one field must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            role: req.role,
            photo_url: req.photo_url,
            bio: req.bio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::Post;

    fn sample_post(category_slug: Option<&str>) -> PostWithCategory {
        PostWithCategory {
            post: Post::new(NewPost {
                title: "A".to_owned(),
                slug: "a".to_owned(),
                author_name: Some("Admin".to_owned()),
                category_slug: category_slug.map(str::to_owned),
                ..Default::default()
            }),
            category: None,
        }
    }

    #[test]
    fn unmatched_category_falls_back_to_raw_slug() {
        let response = PostResponse::from(sample_post(Some("tech")));

        assert_eq!(response.category.id, "");
        assert_eq!(response.category.name, "tech");
        assert_eq!(response.category.slug, "tech");
    }

    #[test]
    fn missing_category_reference_yields_empty_object() {
        let response = PostResponse::from(sample_post(None));

        assert_eq!(response.category.name, "");
        assert_eq!(response.category.slug, "");
    }

    #[test]
    fn matched_category_wins_over_fallback() {
        let mut joined = sample_post(Some("tech"));
        joined.category = Some(Category::new("Tech".to_owned(), "tech".to_owned()));

        let response = PostResponse::from(joined);

        assert_eq!(response.category.name, "Tech");
        assert!(!response.category.id.is_empty());
    }

    #[test]
    fn author_is_always_an_object_with_empty_id() {
        let response = PostResponse::from(sample_post(None));

        assert_eq!(response.author.id, "");
        assert_eq!(response.author.name, "Admin");
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let value = serde_json::to_value(PostResponse::from(sample_post(None))).unwrap();

        assert!(value.get("coverImage").is_some());
        assert!(value.get("isTrending").is_some());
        assert!(value.get("readTime").is_some());
        assert!(value.get("cover_image").is_none());
    }

    #[test]
    fn create_request_defaults_optional_fields() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title": "A", "slug": "a"}"#).unwrap();

        assert!(req.images.is_empty());
        assert!(req.tags.is_empty());
        assert!(!req.is_trending);
        assert_eq!(req.read_time, 0);
    }

    #[test]
    fn update_request_with_single_field_leaves_rest_unset() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"isFeatured": true}"#).unwrap();
        let patch = PostPatch::from(req);

        assert_eq!(patch.is_featured, Some(true));
        assert!(patch.title.is_none());
        assert!(patch.tags.is_none());
    }
}
