//! Database connection management and repositories.

mod associations;
mod base;
mod connections;
mod errors;
pub mod entity;
mod post_repo;
mod tag_repo;
mod user_repo;

pub use base::SqlBaseRepository;
pub use connections::{DatabaseConfig, connect};
pub use post_repo::SqlPostRepository;
pub use tag_repo::SqlTagRepository;
pub use user_repo::SqlUserRepository;
