//! # Blogly Infrastructure
//!
//! SeaORM implementations of the repository ports defined in `blogly-core`,
//! plus connection setup. PostgreSQL is the production backend; SQLite URLs
//! work too and back the test suites.

pub mod database;

pub use database::{
    DatabaseConfig, SqlPostRepository, SqlTagRepository, SqlUserRepository, connect,
};
