use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};

use blogly_core::domain::{Post, PostDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::PostRepository;

use super::associations::replace_post_tags;
use super::base::SqlBaseRepository;
use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag;
use super::errors::{db_err, write_err};

/// SQL post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_tag_id(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .join(JoinType::InnerJoin, post::Relation::PostTag.def())
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_by_title(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Title)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(
        &self,
        user_id: i32,
        draft: PostDraft,
        tag_ids: &[i32],
    ) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            created_at: Set(Utc::now().into()),
            user_id: Set(user_id),
        }
        .insert(&txn)
        .await
        .map_err(write_err("user_id"))?;

        let linked = replace_post_tags(&txn, model.id, tag_ids).await?;
        txn.commit().await.map_err(db_err)?;

        tracing::debug!(post_id = model.id, user_id, tags = linked, "Inserted post");
        Ok(model.into())
    }

    async fn update(
        &self,
        id: i32,
        draft: PostDraft,
        tag_ids: &[i32],
    ) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let model = post::ActiveModel {
            id: Unchanged(id),
            title: Set(draft.title),
            content: Set(draft.content),
            created_at: NotSet,
            user_id: NotSet,
        }
        .update(&txn)
        .await
        .map_err(db_err)?;

        let linked = replace_post_tags(&txn, id, tag_ids).await?;
        txn.commit().await.map_err(db_err)?;

        tracing::debug!(post_id = id, tags = linked, "Updated post");
        Ok(model.into())
    }
}
