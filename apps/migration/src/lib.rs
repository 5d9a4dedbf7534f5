//! Schema migrations for the content store.
//!
//! Also run by the API server at startup, so the tables exist before
//! the first request is served. Every migration is written to tolerate
//! re-execution.

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_content_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_content_tables::Migration)]
    }
}
