use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use blogly_core::domain::{User, UserDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::UserRepository;

use super::base::SqlBaseRepository;
use super::entity::user::{self, Entity as UserEntity};
use super::errors::db_err;

/// SQL user repository.
pub type SqlUserRepository = SqlBaseRepository<UserEntity>;

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn list_by_name(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::LastName)
            .order_by_asc(user::Column::FirstName)
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: UserDraft) -> Result<User, RepoError> {
        let model = user::ActiveModel {
            id: NotSet,
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            image_url: Set(draft.image_url),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        tracing::debug!(user_id = model.id, "Inserted user");
        Ok(model.into())
    }

    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError> {
        // A missing row surfaces as RecordNotUpdated, i.e. NotFound.
        let model = user::ActiveModel {
            id: Unchanged(id),
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            image_url: Set(draft.image_url),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;

        tracing::debug!(user_id = id, "Updated user");
        Ok(model.into())
    }
}
