//! # Blogly Core
//!
//! The domain layer of Blogly: users, posts and tags, the validated drafts
//! used to create and edit them, and the repository ports the persistence
//! layer implements. No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
