use async_trait::async_trait;

use crate::domain::{Post, PostDraft, Tag, TagDraft, User, UserDraft};
use crate::error::RepoError;

/// Generic repository trait shared by every entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. A missing row is `Ok(None)`.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// All rows, in no particular order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity and, through the schema's cascades, its dependents.
    /// Fails with [`RepoError::NotFound`] when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// All users ordered by last name, then first name.
    async fn list_by_name(&self) -> Result<Vec<User>, RepoError>;

    async fn create(&self, draft: UserDraft) -> Result<User, RepoError>;

    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError>;
}

/// Post repository. Every write replaces the post's full tag set.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Posts written by a user, newest first.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn find_by_tag_id(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Every post ordered by title, for selection lists.
    async fn list_by_title(&self) -> Result<Vec<Post>, RepoError>;

    async fn create(
        &self,
        user_id: i32,
        draft: PostDraft,
        tag_ids: &[i32],
    ) -> Result<Post, RepoError>;

    async fn update(&self, id: i32, draft: PostDraft, tag_ids: &[i32])
    -> Result<Post, RepoError>;
}

/// Tag repository. Every write replaces the tag's full post set.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    /// Tags attached to a post, ordered by name.
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    async fn list_by_name(&self) -> Result<Vec<Tag>, RepoError>;

    async fn create(&self, draft: TagDraft, post_ids: &[i32]) -> Result<Tag, RepoError>;

    async fn update(&self, id: i32, draft: TagDraft, post_ids: &[i32]) -> Result<Tag, RepoError>;
}
