use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity. `slug` is unique and doubles as the reference key
/// posts point at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl Category {
    /// Create a new category with a generated ID.
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
        }
    }
}

/// Sparse patch for a category. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl CategoryPatch {
    /// True when no field is set. Category updates reject empty patches.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none()
    }
}
