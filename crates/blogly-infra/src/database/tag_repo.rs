use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use blogly_core::domain::{Tag, TagDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::TagRepository;

use super::associations::replace_tag_posts;
use super::base::SqlBaseRepository;
use super::entity::post_tag;
use super::entity::tag::{self, Entity as TagEntity};
use super::errors::{db_err, write_err};

/// SQL tag repository.
pub type SqlTagRepository = SqlBaseRepository<TagEntity>;

/// Reject `name` if another tag (other than `except`) already uses it. The
/// UNIQUE index still guards against a concurrent insert.
async fn ensure_name_free(
    txn: &DatabaseTransaction,
    name: &str,
    except: Option<i32>,
) -> Result<(), RepoError> {
    let mut query = TagEntity::find().filter(tag::Column::Name.eq(name));
    if let Some(id) = except {
        query = query.filter(tag::Column::Id.ne(id));
    }

    if query.one(txn).await.map_err(db_err)?.is_some() {
        return Err(RepoError::constraint(
            "name",
            format!("a tag named \"{name}\" already exists"),
        ));
    }

    Ok(())
}

#[async_trait]
impl TagRepository for SqlTagRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .join(JoinType::InnerJoin, tag::Relation::PostTag.def())
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_by_name(&self) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: TagDraft, post_ids: &[i32]) -> Result<Tag, RepoError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        ensure_name_free(&txn, &draft.name, None).await?;

        let model = tag::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
        }
        .insert(&txn)
        .await
        .map_err(write_err("name"))?;

        let linked = replace_tag_posts(&txn, model.id, post_ids).await?;
        txn.commit().await.map_err(db_err)?;

        tracing::debug!(tag_id = model.id, posts = linked, "Inserted tag");
        Ok(model.into())
    }

    async fn update(&self, id: i32, draft: TagDraft, post_ids: &[i32]) -> Result<Tag, RepoError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        ensure_name_free(&txn, &draft.name, Some(id)).await?;

        let model = tag::ActiveModel {
            id: Unchanged(id),
            name: Set(draft.name),
        }
        .update(&txn)
        .await
        .map_err(write_err("name"))?;

        let linked = replace_tag_posts(&txn, id, post_ids).await?;
        txn.commit().await.map_err(db_err)?;

        tracing::debug!(tag_id = id, posts = linked, "Updated tag");
        Ok(model.into())
    }
}
