#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    use quill_core::domain::{PostPatch, UserPatch};
    use quill_core::error::RepoError;
    use quill_core::ports::{CategoryRepository, PostRepository, UserRepository};

    use crate::database::entity::{category, post, user};
    use crate::database::postgres_repo::{
        PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository,
    };

    fn post_model(slug: &str, title: &str) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            slug: slug.to_owned(),
            excerpt: Some("e".to_owned()),
            content: Some("c".to_owned()),
            cover_image: None,
            images: json!(["one.png"]),
            date: chrono::Utc::now().into(),
            author_name: Some("Admin".to_owned()),
            category_slug: Some("tech".to_owned()),
            tags: vec!["rust".to_owned()],
            is_trending: false,
            is_featured: false,
            read_time: 5,
            views: 0,
        }
    }

    fn category_model(slug: &str, name: &str) -> category::Model {
        category::Model {
            id: uuid::Uuid::new_v4(),
            name: name.to_owned(),
            slug: slug.to_owned(),
        }
    }

    #[tokio::test]
    async fn find_post_by_slug_joins_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![(
                post_model("a", "Test Post"),
                category_model("tech", "Tech"),
            )]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let found = repo.find_by_slug("a").await.unwrap().unwrap();
        assert_eq!(found.post.title, "Test Post");
        assert_eq!(found.post.images, vec!["one.png".to_owned()]);
        assert_eq!(found.category.unwrap().name, "Tech");
    }

    #[tokio::test]
    async fn find_post_by_unknown_slug_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(post::Model, category::Model)>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_applies_patch_and_rereads_joined_row() {
        let current = post_model("a", "Old Title");
        let mut updated = current.clone();
        updated.title = "New Title".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![current], vec![updated.clone()]])
            .append_query_results(vec![vec![(updated, category_model("tech", "Tech"))]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("New Title".to_owned()),
            ..Default::default()
        };
        let result = repo.update_by_slug("a", patch).await.unwrap().unwrap();

        assert_eq!(result.post.title, "New Title");
        // Fields absent from the patch keep their stored values.
        assert_eq!(result.post.excerpt.as_deref(), Some("e"));
        assert_eq!(result.post.read_time, 5);
    }

    #[tokio::test]
    async fn empty_post_patch_skips_the_write() {
        let current = post_model("a", "Title");

        // Only two result sets are mocked: the current-row read and the
        // joined re-read. An UPDATE would fail the test by draining the
        // mock dry.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![current.clone()]])
            .append_query_results(vec![vec![(current, category_model("tech", "Tech"))]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .update_by_slug("a", PostPatch::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.post.title, "Title");
    }

    #[tokio::test]
    async fn update_of_unknown_slug_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("X".to_owned()),
            ..Default::default()
        };
        assert!(repo.update_by_slug("missing", patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_post_miss_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = repo.delete_by_slug("missing").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_post_hit_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        repo.delete_by_slug("a").await.unwrap();
    }

    #[tokio::test]
    async fn category_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                category_model("ai", "AI"),
                category_model("tech", "Tech"),
            ]])
            .into_connection();

        let repo = PostgresCategoryRepository::new(db);

        let categories = repo.list().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].slug, "ai");
    }

    #[tokio::test]
    async fn user_update_patches_only_provided_fields() {
        let current = user::Model {
            id: uuid::Uuid::new_v4(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            role: user::Role::Author,
            photo_url: None,
            bio: None,
            created_at: chrono::Utc::now().into(),
        };
        let mut updated = current.clone();
        updated.bio = Some("Writes about compilers".to_owned());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![current], vec![updated]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let patch = UserPatch {
            bio: Some("Writes about compilers".to_owned()),
            ..Default::default()
        };
        let result = repo
            .update(uuid::Uuid::new_v4(), patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.bio.as_deref(), Some("Writes about compilers"));
        assert_eq!(result.email, "ada@example.com");
        assert_eq!(result.role, quill_core::domain::UserRole::Author);
    }
}
