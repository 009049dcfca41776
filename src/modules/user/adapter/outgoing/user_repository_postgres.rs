use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::modules::user::application::{
    domain::entities::User,
    ports::outgoing::{NewUserData, UpdateUserData, UserRepository, UserRepositoryError},
};

use super::schema::{EMAIL_ACTIVE_INDEX, USERNAME_ACTIVE_INDEX};
use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, UserRepositoryError> {
        self.db.begin().await.map_err(db_error)
    }
}

fn db_error(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

/// Maps a write failure, turning partial unique index violations into conflicts.
fn map_write_err(e: DbErr, username: &str, email: &str) -> UserRepositoryError {
    let message = e.to_string();
    if message.contains(USERNAME_ACTIVE_INDEX) {
        UserRepositoryError::UsernameTaken(username.to_string())
    } else if message.contains(EMAIL_ACTIVE_INDEX) {
        UserRepositoryError::EmailTaken(email.to_string())
    } else {
        UserRepositoryError::DatabaseError(message)
    }
}

async fn rollback(txn: DatabaseTransaction, err: UserRepositoryError) -> UserRepositoryError {
    if let Err(e) = txn.rollback().await {
        tracing::warn!(error = %e, "Rollback failed");
    }
    err
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn insert(&self, data: NewUserData) -> Result<User, UserRepositoryError> {
        let txn = self.begin().await?;

        let active = UserActiveModel {
            id: NotSet,
            username: Set(data.username.clone()),
            email: Set(data.email.clone()),
            status: Set(true),
        };

        let inserted = match active.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let err = map_write_err(e, &data.username, &data.email);
                return Err(rollback(txn, err).await);
            }
        };

        txn.commit().await.map_err(db_error)?;

        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let txn = self.begin().await?;

        // Row lock keeps a concurrent soft delete from interleaving
        let found = UserEntity::find_by_id(user_id)
            .filter(UserColumn::Status.eq(true))
            .lock_exclusive()
            .one(&txn)
            .await;

        let model = match found {
            Ok(Some(model)) => model,
            Ok(None) => return Err(rollback(txn, UserRepositoryError::UserNotFound).await),
            Err(e) => return Err(rollback(txn, db_error(e)).await),
        };

        let mut active: UserActiveModel = model.into();
        active.username = Set(data.username.clone());
        active.email = Set(data.email.clone());

        let updated = match active.update(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let err = map_write_err(e, &data.username, &data.email);
                return Err(rollback(txn, err).await);
            }
        };

        txn.commit().await.map_err(db_error)?;

        Ok(updated.to_domain())
    }

    async fn set_inactive(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let txn = self.begin().await?;

        let found = UserEntity::find_by_id(user_id)
            .lock_exclusive()
            .one(&txn)
            .await;

        let model = match found {
            Ok(Some(model)) => model,
            Ok(None) => return Err(rollback(txn, UserRepositoryError::UserNotFound).await),
            Err(e) => return Err(rollback(txn, db_error(e)).await),
        };

        let mut active: UserActiveModel = model.into();
        active.status = Set(false);

        if let Err(e) = active.update(&txn).await {
            return Err(rollback(txn, db_error(e)).await);
        }

        txn.commit().await.map_err(db_error)?;

        Ok(())
    }
}
