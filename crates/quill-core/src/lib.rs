//! # Quill Core
//!
//! The domain layer of the Quill content platform.
//! This crate contains pure business types with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod sitemap;

pub use error::RepoError;
