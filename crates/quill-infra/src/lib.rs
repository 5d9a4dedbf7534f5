//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! SeaORM entities and the Postgres repositories behind the content API.

pub mod database;

pub use database::{
    PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository,
};
