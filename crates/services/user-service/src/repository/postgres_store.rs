//! Postgres user repository.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;

use super::entities::user::{self as user_entity, ActiveModel, Entity as UserEntity};
use super::UserRepository;
use common::{AppError, AppResult, OptionExt};
use domain::User;

/// User repository backed by the `users` table.
///
/// Identifiers come from the table's serial column; any ID set on the
/// caller's user before `create` is ignored.
pub struct PostgresUserStore {
    db: DatabaseConnection,
}

impl PostgresUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserStore {
    async fn create(&self, user: &mut User) -> AppResult<()> {
        // INSERT ... RETURNING id, username, email
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        user.id = model.id;
        debug!(user_id = user.id, "user inserted");
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let result = UserEntity::update_many()
            .set(ActiveModel {
                id: NotSet,
                username: Set(user.username.clone()),
                email: Set(user.email.clone()),
            })
            .filter(user_entity::Column::Id.eq(user.id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        debug!(user_id = user.id, "user updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        debug!(user_id = id, "user deleted");
        Ok(())
    }
}
