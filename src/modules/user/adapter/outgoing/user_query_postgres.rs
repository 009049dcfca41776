use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;

use crate::modules::user::application::{
    domain::entities::User,
    ports::outgoing::{UserQuery, UserQueryError},
};

// SeaORM entity
use super::sea_orm_entity::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active() -> Select<UserEntity> {
        UserEntity::find().filter(UserColumn::Status.eq(true))
    }

    async fn first(&self, select: Select<UserEntity>) -> Result<Option<User>, UserQueryError> {
        let model: Option<UserModel> = select
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn list_active(&self) -> Result<Vec<User>, UserQueryError> {
        let models: Vec<UserModel> = Self::active()
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(UserModel::to_domain).collect())
    }

    async fn find_active_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError> {
        self.first(Self::active().filter(UserColumn::Id.eq(user_id)))
            .await
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError> {
        self.first(UserEntity::find_by_id(user_id)).await
    }

    async fn find_active_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.first(Self::active().filter(UserColumn::Username.eq(username)))
            .await
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.first(Self::active().filter(UserColumn::Email.eq(email)))
            .await
    }
}
