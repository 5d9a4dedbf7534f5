//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cover_image: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text", nullable)]
    pub author_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub category_slug: Option<String>,
    pub tags: Vec<String>,
    pub is_trending: bool,
    pub is_featured: bool,
    pub read_time: i32,
    pub views: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // Soft reference by slug, not by primary key; the join may miss.
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategorySlug",
        to = "super::category::Column::Slug"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            cover_image: model.cover_image,
            // Stored JSONB that is not a string array reads back empty.
            images: serde_json::from_value(model.images).unwrap_or_default(),
            date: model.date.into(),
            author_name: model.author_name,
            category_slug: model.category_slug,
            tags: model.tags,
            is_trending: model.is_trending,
            is_featured: model.is_featured,
            read_time: model.read_time,
            views: model.views,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            slug: Set(post.slug),
            excerpt: Set(post.excerpt),
            content: Set(post.content),
            cover_image: Set(post.cover_image),
            images: Set(Json::from(post.images)),
            date: Set(post.date.into()),
            author_name: Set(post.author_name),
            category_slug: Set(post.category_slug),
            tags: Set(post.tags),
            is_trending: Set(post.is_trending),
            is_featured: Set(post.is_featured),
            read_time: Set(post.read_time),
            views: Set(post.views),
        }
    }
}
