use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Post entity - a single article in the content store.
///
/// `slug` is the external lookup key and never changes after creation;
/// `category_slug` is a soft reference resolved against categories at
/// read time, and `author_name` is display-only (no user foreign key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub date: DateTime<Utc>,
    pub author_name: Option<String>,
    pub category_slug: Option<String>,
    pub tags: Vec<String>,
    pub is_trending: bool,
    pub is_featured: bool,
    pub read_time: i32,
    pub views: i32,
}

impl Post {
    /// Create a new post from a draft, applying creation defaults.
    pub fn new(draft: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            slug: draft.slug,
            excerpt: draft.excerpt,
            content: draft.content,
            cover_image: draft.cover_image,
            images: draft.images,
            date: draft.date.unwrap_or_else(Utc::now),
            author_name: draft.author_name,
            category_slug: draft.category_slug,
            tags: draft.tags,
            is_trending: draft.is_trending,
            is_featured: draft.is_featured,
            read_time: draft.read_time,
            views: 0,
        }
    }
}

/// Input for creating a post. `date` falls back to "now" when absent.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub date: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
    pub category_slug: Option<String>,
    pub tags: Vec<String>,
    pub is_trending: bool,
    pub is_featured: bool,
    pub read_time: i32,
}

/// Sparse patch for a post. `None` keeps the stored value.
///
/// `slug`, `date`, and `views` are deliberately absent: none of them is
/// mutable through the partial-update path.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
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

impl PostPatch {
    /// True when no field is set. An empty post patch is a no-op, not
    /// an error.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.cover_image.is_none()
            && self.images.is_none()
            && self.author_name.is_none()
            && self.category_slug.is_none()
            && self.tags.is_none()
            && self.is_trending.is_none()
            && self.is_featured.is_none()
            && self.read_time.is_none()
    }
}

/// A post together with its resolved category, when the soft
/// `category_slug` reference matches a stored category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithCategory {
    pub post: Post,
    pub category: Option<Category>,
}
