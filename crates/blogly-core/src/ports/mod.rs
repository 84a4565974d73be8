//! Ports - trait definitions the infrastructure layer must implement.

mod repository;

pub use repository::{BaseRepository, PostRepository, TagRepository, UserRepository};
