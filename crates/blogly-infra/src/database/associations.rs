//! Maintenance of the `posts_tags` join table.
//!
//! Associations are never patched: each write deletes one side's links and
//! inserts the submitted selection. Ids that name no existing row are
//! dropped and duplicates collapse.

use std::collections::BTreeSet;

use blogly_core::error::RepoError;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QuerySelect};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::errors::{db_err, write_err};

/// Make `tag_ids` the complete tag set of `post_id`. Returns the number of
/// links written.
pub(crate) async fn replace_post_tags(
    txn: &DatabaseTransaction,
    post_id: i32,
    tag_ids: &[i32],
) -> Result<usize, RepoError> {
    PostTagEntity::delete_many()
        .filter(post_tag::Column::PostId.eq(post_id))
        .exec(txn)
        .await
        .map_err(db_err)?;

    let wanted: BTreeSet<i32> = tag_ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(0);
    }

    let existing: Vec<i32> = TagEntity::find()
        .select_only()
        .column(tag::Column::Id)
        .filter(tag::Column::Id.is_in(wanted))
        .into_tuple()
        .all(txn)
        .await
        .map_err(db_err)?;

    insert_links(txn, existing.into_iter().map(|tag_id| (post_id, tag_id))).await
}

/// Make `post_ids` the complete post set of `tag_id`.
pub(crate) async fn replace_tag_posts(
    txn: &DatabaseTransaction,
    tag_id: i32,
    post_ids: &[i32],
) -> Result<usize, RepoError> {
    PostTagEntity::delete_many()
        .filter(post_tag::Column::TagId.eq(tag_id))
        .exec(txn)
        .await
        .map_err(db_err)?;

    let wanted: BTreeSet<i32> = post_ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(0);
    }

    let existing: Vec<i32> = PostEntity::find()
        .select_only()
        .column(post::Column::Id)
        .filter(post::Column::Id.is_in(wanted))
        .into_tuple()
        .all(txn)
        .await
        .map_err(db_err)?;

    insert_links(txn, existing.into_iter().map(|post_id| (post_id, tag_id))).await
}

async fn insert_links(
    txn: &DatabaseTransaction,
    links: impl Iterator<Item = (i32, i32)>,
) -> Result<usize, RepoError> {
    let rows: Vec<post_tag::ActiveModel> = links
        .map(|(post_id, tag_id)| post_tag::ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        })
        .collect();

    if rows.is_empty() {
        return Ok(0);
    }

    let count = rows.len();
    PostTagEntity::insert_many(rows)
        .exec_without_returning(txn)
        .await
        .map_err(write_err("posts_tags"))?;

    Ok(count)
}
